//! Error types for the sms-triage library.
//!
//! This module provides custom error types using `thiserror` for better error handling
//! and more specific error messages throughout the crate.

use thiserror::Error;

/// Errors that can occur in the sms-triage library.
///
/// The triage algorithms themselves are total over message input and never
/// fail; errors come from the environment around them (cache store, pattern
/// compilation, configuration, I/O).
#[derive(Error, Debug)]
pub enum TriageError {
    /// Cache store errors
    #[error("Cache error: {0}")]
    Cache(String),

    /// Pattern compilation errors
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// General error with context
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Result with TriageError
pub type Result<T> = std::result::Result<T, TriageError>;

impl From<sled::Error> for TriageError {
    fn from(err: sled::Error) -> Self {
        TriageError::Cache(err.to_string())
    }
}
