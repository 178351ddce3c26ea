/**
 * Profile Handler
 *
 * GET /api/profile returns the public projection of the user named by the
 * bearer token. Token verification happens in the `AuthUser` extractor, so
 * by the time this runs the identity is already trusted.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::UserDirectory;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - missing, invalid or expired token (from the extractor)
/// * `404 Not Found` - user no longer exists or is inactive
pub async fn profile(
    State(state): State<AppState>,
    AuthUser { user_id }: AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let user = state
        .directory
        .find_by_id(user_id)
        .await?
        .filter(|user| user.is_active)
        .ok_or_else(|| {
            tracing::warn!("Profile requested for missing or inactive user: {}", user_id);
            BackendError::not_found("User not found or inactive")
        })?;

    Ok(Json(UserResponse::from(&user)))
}
