//! Common error types for DataStream.

use thiserror::Error;

/// Top-level error type for DataStream operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A qualified name referenced a provider key with no registered provider.
    #[error("No provider has been configured having key '{0}'")]
    UnknownProvider(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Resource already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Settings could not be decoded or named an unknown provider kind.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the common Error.
pub type Result<T> = std::result::Result<T, Error>;
