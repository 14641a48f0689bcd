//! Manifest serialization.
//!
//! The manifest is the single artifact this tool produces: a JSON array of
//! filenames written as `images.json` inside the scanned directory and
//! regenerated from scratch on every run. The front-end fetches it as-is,
//! so the format stays plain: UTF-8, 2-space indentation, non-ASCII
//! filenames kept literal rather than `\u`-escaped.

use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the generated manifest file, inside the image directory.
pub const MANIFEST_NAME: &str = "images.json";

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("cannot write manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot serialize manifest {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Ordered image filenames, serialized as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Manifest {
    pub files: Vec<String>,
}

impl Manifest {
    pub fn new(files: Vec<String>) -> Self {
        Manifest { files }
    }

    /// Number of listed images.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Write the manifest to `<dir>/images.json`, replacing any existing
    /// file, and return the written path.
    ///
    /// Rendering is deterministic for a given file list, so an unchanged
    /// directory produces byte-identical output across runs.
    pub fn write(&self, dir: &Path) -> Result<PathBuf, WriteError> {
        let path = dir.join(MANIFEST_NAME);
        let json = serde_json::to_string_pretty(self).map_err(|source| WriteError::Serialize {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, json).map_err(|source| WriteError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
