//! Error types for the Lucent renderer.
//!
//! All crates return `LucentResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the Lucent renderer.
#[derive(Debug, Error)]
pub enum LucentError {
    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Configuration value or request is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A serialized mesh file has an unrecognized or unsupported layout.
    #[error("Invalid file format: {0}")]
    Format(String),

    /// A mesh archive segment index is outside the archive's range.
    #[error("Shape index is out of range (requested {index} out of 0..{count})")]
    SegmentOutOfRange { index: usize, count: usize },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for `Result<T, LucentError>`.
pub type LucentResult<T> = Result<T, LucentError>;
