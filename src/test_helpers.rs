//! Shared test utilities.
//!
//! Filesystem tests run against throwaway directories seeded with named
//! empty files — content never matters here, the tool only looks at names.

use std::fs;
use tempfile::TempDir;

/// Create a temp directory containing one empty file per name.
///
/// Tests get an isolated directory they can mutate freely; it is removed
/// when the `TempDir` drops.
pub fn populate(names: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for name in names {
        fs::write(tmp.path().join(name), b"").unwrap();
    }
    tmp
}
