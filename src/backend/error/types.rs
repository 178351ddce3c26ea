/**
 * Backend Error Types
 *
 * This module defines the error taxonomy returned by HTTP handlers.
 *
 * # Error Categories
 *
 * - `Validation` - missing or malformed input (400)
 * - `Conflict` - email already registered (400)
 * - `Auth` - bad credentials, missing/invalid/expired token (401)
 * - `NotFound` - profile lookup found no active user (404)
 * - `Internal` - anything else (500); the client sees a generic message,
 *   the cause goes to the log
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::passwords::HashTaskError;
use crate::backend::auth::users::DirectoryError;
use crate::shared::credentials::MAX_PASSWORD_BYTES;
use crate::shared::SharedError;

/// Message for every failed login, whichever field was wrong
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Authentication error: {message}")]
    Auth { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl BackendError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Authentication failure with the shared generic message
    pub fn invalid_credentials() -> Self {
        Self::Auth {
            message: INVALID_CREDENTIALS.to_string(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Log `cause` and return an error whose client-facing text is generic
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        tracing::error!("Internal error: {}", cause);
        Self::Internal {
            message: "Server error".to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::Auth { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing message
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message }
            | Self::Conflict { message }
            | Self::Auth { message }
            | Self::NotFound { message }
            | Self::Internal { message } => message,
        }
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        tracing::debug!("Rejected field '{}': {}", err.field(), err.message());
        Self::validation(err.message())
    }
}

impl From<DirectoryError> for BackendError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::Conflict => Self::conflict("Email already registered"),
            DirectoryError::Database(e) => Self::internal(e),
        }
    }
}

impl From<HashTaskError> for BackendError {
    fn from(err: HashTaskError) -> Self {
        match err {
            HashTaskError::Bcrypt(bcrypt::BcryptError::Truncation(len)) => {
                tracing::warn!("Password too long for bcrypt: {} bytes", len);
                Self::validation(format!(
                    "Password must be at most {} bytes",
                    MAX_PASSWORD_BYTES
                ))
            }
            other => Self::internal(other),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for BackendError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Self::internal(format!("token encoding failed: {}", err))
    }
}
