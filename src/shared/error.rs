//! Shared Error Types
//!
//! Errors raised by request field validation. They carry the offending
//! field so callers can log it, while only the message reaches clients.
//!
//! # Usage
//!
//! ```rust
//! use keygate::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "email is required");
//! ```
use thiserror::Error;

/// Error types shared by validation code
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}
