//! Error types for employee record operations.

use std::io;
use thiserror::Error;

/// Result type for storage and input parsing operations.
pub type EmsResult<T> = Result<T, EmsError>;

/// Errors raised by the storage gateway and input parsing.
#[derive(Debug, Error)]
pub enum EmsError {
    /// User input could not be coerced into the expected value.
    #[error("Invalid {field} '{input}': {reason}")]
    Validation {
        field: &'static str,
        input: String,
        reason: &'static str,
    },

    /// No employee with the requested id exists.
    #[error("No employee found with ID: {0}")]
    NotFound(i64),

    /// SQLite returned an error.
    #[error("Database error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Configuration file could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// File system failure while resolving data paths.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The interactive input stream failed or was closed.
    #[error("Input error: {0}")]
    Prompt(String),
}

impl EmsError {
    pub fn validation(field: &'static str, input: &str, reason: &'static str) -> Self {
        EmsError::Validation {
            field,
            input: input.to_string(),
            reason,
        }
    }
}
