/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /api/register.
 *
 * # Registration Process
 *
 * 1. Validate presence and shape of email and password
 * 2. Normalize the email and reject it if already registered
 * 3. Hash the password (blocking pool)
 * 4. Insert the user, active by default
 * 5. Return the public projection with 201
 *
 * Two concurrent registrations for the same email can both pass step 2;
 * the directory's insert is the final arbiter and its conflict maps to the
 * same 400 response.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::{RegisterRequest, UserResponse};
use crate::backend::auth::users::UserDirectory;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - missing/invalid fields, or email already registered
/// * `500 Internal Server Error` - hashing or storage failure
///
/// # Example Request
///
/// ```http
/// POST /api/register HTTP/1.1
/// Content-Type: application/json
///
/// {"email": "user@example.com", "password": "secret"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"id": "123e4567-e89b-12d3-a456-426614174000", "email": "user@example.com", "active": true}
/// ```
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), BackendError> {
    let Json(request) = payload?;
    let credentials = request.into_credentials()?;

    tracing::info!("Register request for: {}", credentials.email);

    if state.directory.find_by_email(&credentials.email).await?.is_some() {
        tracing::warn!("Email already registered: {}", credentials.email);
        return Err(BackendError::conflict("Email already registered"));
    }

    let password_hash = state.hasher.hash_blocking(credentials.password).await?;

    let user = state
        .directory
        .insert(&credentials.email, &password_hash)
        .await
        .inspect_err(|e| tracing::warn!("Failed to create user {}: {}", credentials.email, e))?;

    tracing::info!("User created successfully: {} ({})", user.id, user.email);

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}
