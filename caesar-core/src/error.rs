//! Error types for CaesarForum.

use thiserror::Error;

/// Errors that can occur in caesar operations.
#[derive(Error, Debug)]
pub enum CaesarError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid time '{0}': expected HH:MM")]
    InvalidTime(String),

    #[error("{0}")]
    Validation(String),

    #[error("No event on {0}")]
    EventNotFound(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for caesar operations.
pub type CaesarResult<T> = Result<T, CaesarError>;
