//! # Mesh Errors
//!
//! Error types for every stage of the pipeline. All failures are explicit:
//! no stage substitutes a degraded result for a failed one.

use std::path::PathBuf;

use config::constants::Bound;
use thiserror::Error;

use crate::parts::{FileSystemError, PartKind};

/// Errors that can occur while building, loading or assembling meshes.
#[derive(Debug, Error)]
pub enum MeshError {
    /// An input parameter is outside its accepted range.
    #[error("Invalid parameter '{name}' = {value}: {bound}")]
    InvalidParameter {
        /// Parameter name as the caller knows it.
        name: &'static str,
        /// Rejected value.
        value: f64,
        /// The bound that was violated.
        bound: Bound,
    },

    /// The requested part kind is not known to the library.
    #[error("Unknown part kind: {0}")]
    UnknownPartKind(String),

    /// A mesh file record could not be parsed or references a missing element.
    #[error("Malformed mesh file at line {line}: {message}")]
    MalformedMeshFile { line: usize, message: String },

    /// A source could not be read or written.
    #[error("I/O failure on {path}: {source}")]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A part's socket table does not fit its mesh.
    #[error("Socket anchor {anchor} of {kind} part points at vertex {index}, mesh has {vertex_count}")]
    InvalidSocketTable {
        kind: PartKind,
        anchor: &'static str,
        index: u32,
        vertex_count: usize,
    },

    /// A face referenced a vertex that does not exist yet.
    #[error("Face index {index} out of range ({vertex_count} vertices)")]
    DanglingIndex { index: u32, vertex_count: usize },

    /// The stitched topology is inconsistent.
    #[error("Invalid topology: {0}")]
    InvalidTopology(String),
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, value: f64, bound: Bound) -> Self {
        Self::InvalidParameter { name, value, bound }
    }

    /// Creates a malformed file error for a 1-based line number.
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedMeshFile {
            line,
            message: message.into(),
        }
    }

    /// Creates an I/O failure error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoFailure {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology(message.into())
    }
}

impl From<FileSystemError> for MeshError {
    fn from(err: FileSystemError) -> Self {
        match err {
            FileSystemError::NotFound { path } => Self::IoFailure {
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
                path: path.into(),
            },
            FileSystemError::Io { path, source } => Self::IoFailure {
                path: path.into(),
                source,
            },
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_names_bound() {
        let err = MeshError::invalid_parameter("pitch", 61.0, Bound::Max(60.0));
        let text = err.to_string();
        assert!(text.contains("pitch"));
        assert!(text.contains("<= 60"));
    }

    #[test]
    fn test_not_found_maps_to_io_failure() {
        let err: MeshError = FileSystemError::NotFound {
            path: "parts/missing.obj".into(),
        }
        .into();
        match err {
            MeshError::IoFailure { path, source } => {
                assert_eq!(path, PathBuf::from("parts/missing.obj"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    /// Errors cross thread boundaries in callers that spawn work.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
