/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/register` - User registration
 * - `POST /api/login` - User login
 * - `GET /api/profile` - Get current user info
 *
 * ## Misc
 * - `GET|POST /api/hello` - Connectivity check
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{hello, login, profile, register};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// `/api/profile` requires a JWT in the `Authorization` header; the other
/// routes are public.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/profile", get(profile))
        .route("/api/hello", get(hello).post(hello))
}
