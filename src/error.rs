//! Error types for docsect library.

use std::io;
use thiserror::Error;

/// Result type alias for docsect operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types raised by the collaborators around the section core.
///
/// Segmentation, annotation and snippet scoring never fail; these errors
/// come from reading inputs, loading configuration and rendering output.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON input could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input format could not be recognized.
    #[error("Unknown input format")]
    UnknownFormat,

    /// The input format is recognized but no reader handles it.
    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    /// A document read exceeded its time budget.
    #[error("Timed out after {secs:.1}s reading {document}")]
    Timeout {
        /// Document name
        document: String,
        /// Time budget in seconds
        secs: f64,
    },

    /// The document reader failed.
    #[error("Reader error: {0}")]
    Reader(String),

    /// Configuration value out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
