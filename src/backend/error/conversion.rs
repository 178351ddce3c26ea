/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, so handlers can return it directly.
 *
 * # Response Format
 *
 * ```json
 * { "message": "Invalid credentials" }
 * ```
 */

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = MessageResponse {
            message: self.message().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Malformed or non-JSON bodies become a `400 {message}` like any other
/// validation failure.
impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        BackendError::validation("Request body must be a JSON object")
    }
}
