//! Common error types for employee events

use thiserror::Error;

/// Common result type for store and model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the store and the risk model
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Risk model file could not be parsed or has the wrong shape
    #[error("Model error: {0}")]
    Model(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Model(err.to_string())
    }
}
