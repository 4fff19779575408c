//! Error types for session operations.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Session-specific errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Connection error (refused, reset, DNS, TLS)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
