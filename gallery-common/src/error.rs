//! Common error types for the gallery client

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Common result type for gallery operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the gallery crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Form validation failed; nothing was sent to the server
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
