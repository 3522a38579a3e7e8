//! Error types for the Trigon mesh pipeline.
//!
//! All crates return `TrigonResult<T>` from fallible operations.
//! File- and format-level failures abort a load before any partial
//! mesh is constructed; degenerate geometry is absorbed locally as
//! best-effort numeric output and never surfaces here.

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for the Trigon mesh pipeline.
#[derive(Debug, Error)]
pub enum TrigonError {
    /// Model file is missing or unreadable.
    #[error("Failed to open model file '{}': {source}", path.display())]
    FileOpen {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// The declared model format tag is not recognized.
    #[error("Unsupported model format: '{0}'")]
    UnsupportedFormat(String),

    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O operation failed outside of model-file opening.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for `Result<T, TrigonError>`.
pub type TrigonResult<T> = Result<T, TrigonError>;
