//! Filesystem abstractions used by the part library.
//!
//! Tests and embedders use the in-memory implementation; the command line
//! reads from a directory on disk.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Minimal filesystem trait supporting part model retrieval.
///
/// # Examples
/// ```
/// use strip_mesh::parts::{FileSystem, InMemoryFilesystem};
/// let fs = InMemoryFilesystem::default();
/// assert!(fs.read_to_string("European modified.obj").is_err());
/// ```
pub trait FileSystem {
    /// Reads an entire file into memory.
    fn read_to_string(&self, path: &str) -> Result<String, FileSystemError>;
}

/// Error raised when filesystem operations fail.
#[derive(Debug, Error)]
pub enum FileSystemError {
    /// The requested path could not be found.
    #[error("file not found: {path}")]
    NotFound { path: String },

    /// The path exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// In-memory filesystem intended for tests and embedding.
///
/// # Examples
/// ```
/// use strip_mesh::parts::{FileSystem, InMemoryFilesystem};
/// let mut fs = InMemoryFilesystem::default();
/// fs.insert("tube.obj", "v 0 0 0\n");
/// assert_eq!(fs.read_to_string("tube.obj").unwrap(), "v 0 0 0\n");
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryFilesystem {
    files: HashMap<String, String>,
}

impl InMemoryFilesystem {
    /// Inserts or replaces a file entry.
    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }
}

impl FileSystem for InMemoryFilesystem {
    fn read_to_string(&self, path: &str) -> Result<String, FileSystemError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| FileSystemError::NotFound { path: path.into() })
    }
}

/// Reads files relative to a root directory on disk.
#[derive(Debug, Clone)]
pub struct OsFilesystem {
    root: PathBuf,
}

impl OsFilesystem {
    /// Creates a filesystem rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileSystem for OsFilesystem {
    fn read_to_string(&self, path: &str) -> Result<String, FileSystemError> {
        let full = self.root.join(path);
        std::fs::read_to_string(&full).map_err(|source| {
            let path = full.display().to_string();
            if source.kind() == io::ErrorKind::NotFound {
                FileSystemError::NotFound { path }
            } else {
                FileSystemError::Io { path, source }
            }
        })
    }
}
