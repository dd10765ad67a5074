//! Common error types for the album catalog

use thiserror::Error;

/// Common result type for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types shared by the catalog and its adapters
///
/// `NotFound` and `InvalidInput` carry the exact message reported to
/// clients; adapters must pass it through verbatim.
#[derive(Error, Debug)]
pub enum Error {
    /// Referenced album id does not exist in the catalog
    #[error("Not found: {0}")]
    NotFound(String),

    /// Missing or malformed caller-supplied data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The album lookup failure reported by get, update and delete
    pub fn album_not_found() -> Self {
        Error::NotFound("Album not found".to_string())
    }

    /// Client-facing message without the variant prefix
    pub fn message(&self) -> String {
        match self {
            Error::NotFound(msg) | Error::InvalidInput(msg) | Error::Config(msg) => msg.clone(),
            Error::Io(e) => e.to_string(),
        }
    }
}
