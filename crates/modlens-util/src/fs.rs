//! File-system read capability.
//!
//! Manifest lookups only ever need two things from the file system: an
//! existence check and a whole-file read. Both go through [`ManifestFs`] so
//! callers can substitute an in-memory view.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Read-only access to manifest files.
pub trait ManifestFs {
    /// Whether `path` names an existing file.
    fn exists(&self, path: &Path) -> bool;

    /// Read the whole file at `path` as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;
}

/// [`ManifestFs`] backed by the real file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFs;

impl ManifestFs for StdFs {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// [`ManifestFs`] holding its files in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: HashMap<PathBuf, String>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a file.
    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    /// Builder-style variant of [`MemoryFs::insert`].
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }
}

impl ManifestFs for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }
}
