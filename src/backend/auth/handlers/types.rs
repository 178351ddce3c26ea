/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by authentication handlers.
 * These types are shared across the register, login, and profile handlers.
 */

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::backend::auth::users::User;
use crate::shared::credentials::{normalize_email, require, validate_email, validate_password};
use crate::shared::SharedError;

/// Email/password pair after validation and normalization
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Register request
///
/// Fields are optional so a missing field reaches validation and becomes a
/// `400 {message}` instead of a deserialization rejection.
#[derive(Deserialize, Serialize, Default)]
pub struct RegisterRequest {
    /// User's email address
    pub email: Option<String>,
    /// User's password (will be hashed before storage)
    pub password: Option<String>,
}

impl RegisterRequest {
    pub fn into_credentials(self) -> Result<Credentials, SharedError> {
        let email = require("email", self.email.as_deref())?;
        let password = require("password", self.password.as_deref())?;

        let email = normalize_email(email);
        validate_email(&email)?;
        validate_password(password)?;

        Ok(Credentials {
            email,
            password: password.to_string(),
        })
    }
}

/// Login request
#[derive(Deserialize, Serialize, Default)]
pub struct LoginRequest {
    /// User's email address (matched case-insensitively)
    pub email: Option<String>,
    /// User's password (will be verified against stored hash)
    pub password: Option<String>,
}

impl LoginRequest {
    /// Only presence is checked here; a malformed email simply fails lookup.
    pub fn into_credentials(self) -> Result<Credentials, SharedError> {
        let email = require("email", self.email.as_deref())?;
        let password = require("password", self.password.as_deref())?;

        Ok(Credentials {
            email: normalize_email(email),
            password: password.to_string(),
        })
    }
}

// Passwords never appear in Debug output.
const REDACTED: &str = "<redacted>";

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .finish()
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .finish()
    }
}

/// Auth response
///
/// Returned by the login handler.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// Bearer token
    pub token: String,
    /// User information (without sensitive data)
    pub user: UserResponse,
}

/// User response (without sensitive data)
///
/// The only shape in which a user leaves the server. There is no field for
/// the password digest.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// User's email address
    pub email: String,
    pub active: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            active: user.is_active,
        }
    }
}

/// `{message}` body used by the hello endpoint and by every error response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}
