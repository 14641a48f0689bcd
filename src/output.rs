//! CLI output formatting.
//!
//! One status line per successful run. `format_report` is pure — no I/O —
//! so tests assert on the exact string; `print_report` is the stdout
//! wrapper.

use std::path::Path;

/// Format the success line: output path plus image count.
///
/// ```text
/// OK -> img/images.json ( 3 imgs )
/// ```
pub fn format_report(path: &Path, count: usize) -> String {
    format!("OK -> {} ( {} imgs )", path.display(), count)
}

/// Print the success line to stdout.
pub fn print_report(path: &Path, count: usize) {
    println!("{}", format_report(path, count));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_matches_expected_shape() {
        let line = format_report(Path::new("img/images.json"), 3);
        assert_eq!(line, "OK -> img/images.json ( 3 imgs )");
    }

    #[test]
    fn report_with_zero_images() {
        let line = format_report(Path::new("img/images.json"), 0);
        assert_eq!(line, "OK -> img/images.json ( 0 imgs )");
    }
}
