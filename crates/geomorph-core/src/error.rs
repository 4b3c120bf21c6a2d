//! Error type shared by every Geomorph operation.

use thiserror::Error;

/// Errors that can occur while decoding, transforming or encoding an image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessingError {
    /// The raster is zero-sized, undecodable, or has an unsupported layout.
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// A parameter is non-finite or would collapse (or overflow) a canvas dimension.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Reading, encoding or persisting image bytes failed.
    #[error("I/O failure: {0}")]
    Io(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ProcessingError>;
