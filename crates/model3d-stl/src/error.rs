//! Error types for STL loading.

use std::path::PathBuf;

use model3d_types::GeometryError;
use thiserror::Error;

/// Result type for STL loading operations.
pub type StlResult<T> = Result<T, StlError>;

/// Errors that can occur while loading an STL file.
#[derive(Debug, Error)]
pub enum StlError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Invalid file content (parse error).
    #[error("invalid STL content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// The declared binary facet count does not match the payload.
    #[error("binary STL declares {expected} facets but only {got} are present")]
    FacetCountMismatch {
        /// Facet count from the binary header.
        expected: u32,
        /// Number of complete facet records actually present.
        got: u32,
    },

    /// A facet describes invalid geometry and the load policy rejects it.
    #[error("degenerate facet at index {index}: {source}")]
    DegenerateFacet {
        /// Zero-based index of the offending facet record.
        index: usize,
        /// The underlying geometric failure.
        source: GeometryError,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Float parsing error in an ASCII file.
    #[error("float parsing error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),
}

impl StlError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }
}
