//! # img-manifest
//!
//! Generates a JSON manifest of gallery images in natural numeric order.
//! The filesystem is the data source: a flat directory of `img*` files
//! becomes `images.json`, the ordered list a front-end gallery or slideshow
//! fetches to know what to display.
//!
//! # Pipeline
//!
//! One linear pass, no state between runs:
//!
//! ```text
//! list  →  filter  →  sort  →  serialize  →  report
//! (img/)   (img* + image ext)  (natural)    (img/images.json)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists the directory's immediate entries and keeps the candidates |
//! | [`naming`] | Natural-order sort key: first embedded number, compared by value |
//! | [`manifest`] | The `images.json` artifact — typed, serialized, written |
//! | [`output`] | Status-line formatting: pure `format_*` plus `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Natural Order Without a Numeric Ceiling
//!
//! `img2.png` must sort before `img10.webp`, which rules out lexicographic
//! order. The key in [`naming`] takes the first digit run in the name and
//! compares runs as decimal numerals of unbounded length, so a filename
//! carrying a 40-digit timestamp orders exactly instead of wrapping some
//! fixed-width integer. Names with no digits sort after all numbered ones.
//!
//! ## Deterministic Output
//!
//! The manifest is regenerated from scratch on every run, and two runs over
//! an unchanged directory produce byte-identical files: listing order is
//! normalized by a byte-wise pre-sort before the (stable) natural sort, and
//! JSON rendering is deterministic. Consumers can diff or cache the
//! manifest without seeing phantom changes.

pub mod manifest;
pub mod naming;
pub mod output;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
