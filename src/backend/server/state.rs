/**
 * Application State Management
 *
 * `AppState` is the single state container handed to the router. It holds
 * the three collaborators every auth handler needs:
 *
 * - the user directory (`Arc<dyn UserDirectory>`)
 * - the session issuer, which owns the signing secret
 * - the password hasher (work factor only)
 *
 * All of them are read-only after startup; the directory does its own
 * internal synchronization. Cloning the state clones `Arc`s.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only the piece they
 * need, following Axum's recommended pattern.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::sessions::SessionIssuer;
use crate::backend::auth::users::UserDirectory;
use crate::shared::AuthConfig;

pub type SharedDirectory = Arc<dyn UserDirectory>;

#[derive(Clone)]
pub struct AppState {
    pub directory: SharedDirectory,
    pub sessions: Arc<SessionIssuer>,
    pub hasher: PasswordHasher,
}

impl AppState {
    pub fn new(config: &AuthConfig, directory: SharedDirectory) -> Self {
        Self {
            directory,
            sessions: Arc::new(SessionIssuer::new(
                config.jwt_secret.as_bytes(),
                config.token_ttl,
            )),
            hasher: PasswordHasher::new(config.bcrypt_cost),
        }
    }
}

impl FromRef<AppState> for SharedDirectory {
    fn from_ref(state: &AppState) -> Self {
        state.directory.clone()
    }
}

impl FromRef<AppState> for Arc<SessionIssuer> {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(state: &AppState) -> Self {
        state.hasher
    }
}
