/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/login.
 *
 * # Authentication Process
 *
 * 1. Require email and password
 * 2. Look up user by normalized email
 * 3. Verify password using bcrypt
 * 4. Issue a session token
 * 5. Return token and user info
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same 401 body
 * - Passwords are never logged or returned in responses
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::backend::auth::users::UserDirectory;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - email or password missing
/// * `401 Unauthorized` - unknown email or wrong password (same message)
/// * `500 Internal Server Error` - storage or token failure
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "user": {"id": "123e4567-e89b-12d3-a456-426614174000", "email": "user@example.com", "active": true}
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload?;
    let credentials = request.into_credentials()?;

    tracing::info!("Login request for: {}", credentials.email);

    let user = state
        .directory
        .find_by_email(&credentials.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login for unknown email: {}", credentials.email);
            BackendError::invalid_credentials()
        })?;

    let valid = state
        .hasher
        .verify_blocking(credentials.password, user.password_hash.clone())
        .await?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", user.id);
        return Err(BackendError::invalid_credentials());
    }

    let token = state.sessions.issue(user.id)?;

    tracing::info!("User logged in successfully: {} ({})", user.id, user.email);

    Ok(Json(AuthResponse {
        token,
        user: UserResponse::from(&user),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::users::MemoryUserDirectory;
    use crate::backend::error::INVALID_CREDENTIALS;
    use crate::shared::AuthConfig;
    use axum::http::StatusCode;
    use std::sync::Arc;

    async fn state_with_user(email: &str, password: &str) -> AppState {
        let config = AuthConfig::builder()
            .jwt_secret("login-test-secret-0123456789abcdef")
            .bcrypt_cost(4)
            .build()
            .unwrap();
        let directory = Arc::new(MemoryUserDirectory::new());
        let state = AppState::new(&config, directory.clone());
        let hash = state.hasher.hash(password).unwrap();
        directory.insert(email, &hash).await.unwrap();
        state
    }

    fn request(email: Option<&str>, password: Option<&str>) -> Result<Json<LoginRequest>, JsonRejection> {
        Ok(Json(LoginRequest {
            email: email.map(str::to_string),
            password: password.map(str::to_string),
        }))
    }

    #[tokio::test]
    async fn test_login_success() {
        let state = state_with_user("test@example.com", "password123").await;

        let Json(response) = login(State(state.clone()), request(Some("Test@Example.com"), Some("password123")))
            .await
            .unwrap();

        assert!(!response.token.is_empty());
        assert_eq!(response.user.email, "test@example.com");
        let user_id = state.sessions.verify(&response.token).unwrap();
        assert_eq!(user_id.to_string(), response.user.id);
    }

    #[tokio::test]
    async fn test_login_invalid_password() {
        let state = state_with_user("test@example.com", "password123").await;
        let err = login(State(state), request(Some("test@example.com"), Some("wrongpassword")))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), INVALID_CREDENTIALS);
    }

    #[tokio::test]
    async fn test_login_user_not_found() {
        let state = state_with_user("test@example.com", "password123").await;
        let err = login(State(state), request(Some("nobody@example.com"), Some("password123")))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), INVALID_CREDENTIALS);
    }

    #[tokio::test]
    async fn test_login_missing_fields() {
        let state = state_with_user("test@example.com", "password123").await;
        let err = login(State(state.clone()), request(None, Some("password123")))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = login(State(state), request(Some("test@example.com"), None))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_login_corrupt_digest_is_unauthorized() {
        let config = AuthConfig::builder()
            .jwt_secret("login-test-secret-0123456789abcdef")
            .bcrypt_cost(4)
            .build()
            .unwrap();
        let directory = Arc::new(MemoryUserDirectory::new());
        directory.insert("broken@example.com", "not-a-bcrypt-digest").await.unwrap();
        let state = AppState::new(&config, directory);

        let err = login(State(state), request(Some("broken@example.com"), Some("anything")))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }
}
