//! Error types for STL parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while reading an STL file.
///
/// A failed parse never yields a partial mesh.
#[derive(Debug, Error)]
pub enum IoError {
    /// Structurally invalid STL: truncated data, a triangle count that
    /// disagrees with the byte length, non-numeric or non-finite coordinates,
    /// or a facet without exactly three vertices.
    #[error("malformed STL file: {reason}")]
    MalformedFile {
        /// What was wrong, with enough context to locate it.
        reason: String,
    },

    /// The file is well formed but contains no facets.
    #[error("STL file contains no triangles")]
    EmptyMesh,

    /// Neither a binary nor an ASCII STL layout was recognized.
    #[error("unsupported encoding: input is neither binary nor ASCII STL")]
    UnsupportedEncoding,

    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Create a `MalformedFile` error with the given reason.
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedFile {
            reason: reason.into(),
        }
    }

    /// Whether this error came from the content of the file rather than from
    /// reading it.
    #[must_use]
    pub const fn is_content_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedFile { .. } | Self::EmptyMesh | Self::UnsupportedEncoding
        )
    }
}
