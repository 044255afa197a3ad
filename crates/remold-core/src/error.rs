//! Error types for the Remold core library
//!
//! This module defines the error handling system for Remold, using thiserror
//! for ergonomic error definitions and anyhow for flexible error sources.

use crate::engine::path::PathError;
use crate::validator::ValidationError;
use thiserror::Error;

/// Main error type for Remold operations
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration document failed shape validation
    #[error("config validation failed with {} error(s)", errors.len())]
    InvalidConfig { errors: Vec<ValidationError> },

    /// A transformation path failed to parse
    #[error("invalid transformation path: {0}")]
    Path(#[from] PathError),

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Generic internal error with context
    #[error("internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Conversion implementations
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Internal {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Error::InvalidConfig { errors }
    }
}
