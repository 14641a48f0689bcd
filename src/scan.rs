//! Directory scanning and candidate filtering.
//!
//! The image directory is flat: one pass over its immediate entries, no
//! recursion. An entry is a candidate when it is a regular file, its
//! lowercased name starts with `img`, and its lowercased extension is one
//! of the allowed image formats. Everything else — subdirectories, the
//! manifest itself, unrelated files — is silently skipped.
//!
//! Names are sorted byte-wise right after listing so the natural sort in
//! [`scan`] starts from a deterministic order on any filesystem. The
//! natural sort is stable, so names with equal keys (`IMG5.PNG` next to
//! `img5.png`) land in the same order on every run.

use crate::naming;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot list image directory {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Prefix every candidate name must carry (case-insensitive).
const NAME_PREFIX: &str = "img";

/// Allowed image extensions, lowercased, without the dot.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Scan `dir` and return candidate image filenames in natural order.
pub fn scan(dir: &Path) -> Result<Vec<String>, ScanError> {
    let mut names = list_candidates(dir)?;
    names.sort_by_cached_key(|name| naming::sort_key(name));
    Ok(names)
}

/// List candidate image filenames in `dir`, sorted byte-wise.
///
/// Fatal when the directory is missing, not a directory, or unreadable;
/// everything skipped by the filter is not an error.
pub fn list_candidates(dir: &Path) -> Result<Vec<String>, ScanError> {
    let entries = fs::read_dir(dir).map_err(|source| ScanError::Unreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ScanError::Unreadable {
            path: dir.to_path_buf(),
            source,
        })?;
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_candidate(&name) {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}

/// Candidate check: `img` prefix plus allowed extension, both on the
/// lowercased name.
fn is_candidate(name: &str) -> bool {
    let lower = name.to_lowercase();
    if !lower.starts_with(NAME_PREFIX) {
        return false;
    }
    let ext = Path::new(&lower)
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}
