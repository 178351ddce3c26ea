/**
 * keygate Server Entry Point
 *
 * Loads configuration from the environment (and `.env` if present),
 * initializes tracing, and serves the API.
 */

use keygate::backend::server::create_app;
use keygate::shared::AuthConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env may set RUST_LOG, so load it before the subscriber
    dotenv::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!("[STARTUP] Server initialization started");

    let config = AuthConfig::from_env().inspect_err(|e| {
        tracing::error!("[STARTUP] Invalid configuration: {}", e);
    })?;

    let app = create_app(&config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("[STARTUP] Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
