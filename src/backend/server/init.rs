/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including directory selection, state creation, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Load the user directory (PostgreSQL or in-memory)
 * 2. Build the application state from the configuration
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_directory, StartupError};
use crate::backend::server::state::AppState;
use crate::shared::AuthConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns `StartupError` when a configured database cannot be reached or
/// migrated.
pub async fn create_app(config: &AuthConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing keygate backend server");
    tracing::debug!("Using configuration: {:?}", config);

    let directory = load_directory(config).await?;
    let app_state = AppState::new(config, directory);

    tracing::info!(
        "Router configured (bcrypt cost {}, token lifetime {}s)",
        config.bcrypt_cost,
        config.token_ttl.as_secs()
    );

    Ok(create_router(app_state))
}
