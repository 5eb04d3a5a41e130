//! Error types for slicing operations.

use thiserror::Error;

/// Errors that can occur when configuring or running a slicing pass.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SectionError {
    /// Sample fraction outside the half-open interval (0, 1].
    #[error("invalid sample fraction: {0} (must be in (0, 1])")]
    InvalidSampleFraction(f64),
}
