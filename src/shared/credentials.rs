//! Credential field rules
//!
//! Normalization and validation applied to email/password pairs before they
//! reach the hasher or the user directory.

use crate::shared::error::SharedError;

/// bcrypt reads 72 bytes including the trailing NUL, leaving 71 for the password
pub const MAX_PASSWORD_BYTES: usize = 71;

/// Canonical form of an email address: trimmed and lower-cased.
///
/// Both storage and lookup go through this, so addresses compare
/// case-insensitively.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Require a non-blank value for `field`.
pub fn require<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, SharedError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(SharedError::validation(field, format!("{} is required", field))),
    }
}

/// Basic shape check: one `@` with non-empty sides and no whitespace.
pub fn validate_email(email: &str) -> Result<(), SharedError> {
    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| SharedError::validation("email", "Invalid email format"))?;
    if local.is_empty() || domain.is_empty() || email.chars().any(char::is_whitespace) {
        return Err(SharedError::validation("email", "Invalid email format"));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), SharedError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at most {} bytes", MAX_PASSWORD_BYTES),
        ));
    }
    Ok(())
}
