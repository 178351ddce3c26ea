/**
 * Bearer Token Authentication
 *
 * Extractor for routes that require a logged-in user. It reads the
 * `Authorization: Bearer <token>` header and verifies the token with the
 * `SessionIssuer` from state. The directory is not consulted here, so a bad
 * token is rejected before any lookup happens.
 */

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::backend::auth::sessions::SessionIssuer;
use crate::backend::error::BackendError;

/// Identity recovered from a verified bearer token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: Uuid,
}

/// Pull the token out of an `Authorization: Bearer ...` header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

impl<S> FromRequestParts<S> for AuthUser
where
    Arc<SessionIssuer>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or_else(|| {
            tracing::warn!("Missing or malformed Authorization header");
            BackendError::unauthorized("Missing or invalid authorization token")
        })?;

        let sessions = Arc::<SessionIssuer>::from_ref(state);
        let user_id = sessions.verify(token).map_err(|e| {
            tracing::warn!("Rejected bearer token: {}", e);
            BackendError::unauthorized("Missing or invalid authorization token")
        })?;

        Ok(AuthUser { user_id })
    }
}
