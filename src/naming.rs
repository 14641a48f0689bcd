//! Natural-order sort key for image filenames.
//!
//! Gallery filenames carry a sequence number somewhere in the name
//! (`img1.jpg`, `IMG_0042.jpeg`, `img10.webp`). A plain lexicographic sort
//! puts `img10` before `img2`; the key built here compares the embedded
//! number by value instead, so `img2` precedes `img10`.
//!
//! Key shape: numeric rank first, lowercased full name as tiebreak.
//! - The rank comes from the *first* maximal run of ASCII digits in the
//!   name. `img10_v2.jpg` keys as 10, not 2.
//! - Names with no digit run rank after every numbered name and fall back
//!   to the lowercased-name tiebreak among themselves.
//! - Digit runs compare exactly at any length: [`Numeral`] keeps the digits
//!   as a leading-zero-stripped string and orders shorter-numeral-first,
//!   then lexicographic, which matches arbitrary-precision integer
//!   comparison. A digit run longer than any machine word cannot wrap.

use std::cmp::Ordering;

/// A decimal numeral of unbounded length, ordered by numeric value.
///
/// Leading zeros are stripped on parse, so the numerals in `img007.png` and
/// `img7.png` compare equal; the name tiebreak in [`SortKey`] then decides
/// their relative order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeral(String);

impl Numeral {
    fn parse(digits: &str) -> Self {
        let stripped = digits.trim_start_matches('0');
        if stripped.is_empty() {
            // All-zero run ("000") is the numeral zero
            Numeral("0".to_string())
        } else {
            Numeral(stripped.to_string())
        }
    }
}

impl Ord for Numeral {
    fn cmp(&self, other: &Self) -> Ordering {
        // With leading zeros gone, more digits means strictly larger
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Numeral {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Numeric rank of a filename. Variant order drives the derived `Ord`:
/// every numbered name sorts before every unnumbered one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    Numbered(Numeral),
    Unnumbered,
}

/// Sort key for one filename. Field order drives the derived `Ord`:
/// rank first, lowercased name as tiebreak.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    pub rank: Rank,
    pub tiebreak: String,
}

/// Compute the natural-order key for a filename.
///
/// - `"img2.png"` sorts before `"img10.webp"` (2 < 10)
/// - `"img10_v2.jpg"` keys as 10 — only the first digit run counts
/// - `"imgcover.png"` sorts after every numbered name
/// - `"IMG5.PNG"` and `"img5.png"` produce equal keys
pub fn sort_key(name: &str) -> SortKey {
    let rank = match first_digit_run(name) {
        Some(digits) => Rank::Numbered(Numeral::parse(digits)),
        None => Rank::Unnumbered,
    };
    SortKey {
        rank,
        tiebreak: name.to_lowercase(),
    }
}

/// First maximal run of ASCII digits anywhere in `name`, if any.
fn first_digit_run(name: &str) -> Option<&str> {
    let start = name.find(|c: char| c.is_ascii_digit())?;
    let run = &name[start..];
    let end = run
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(run.len());
    Some(&run[..end])
}
