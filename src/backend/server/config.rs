/**
 * Server Configuration
 *
 * Chooses the user directory backing the server.
 *
 * # Selection
 *
 * - `DATABASE_URL` set: connect a PostgreSQL pool, run migrations, and use
 *   `PgUserDirectory`
 * - otherwise: log a warning and use `MemoryUserDirectory` (users are lost
 *   on restart)
 *
 * A URL that cannot be connected to is a startup error, never a fallback
 * to memory.
 */

use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

use crate::backend::auth::users::{MemoryUserDirectory, PgUserDirectory};
use crate::backend::server::state::SharedDirectory;
use crate::shared::AuthConfig;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Build the directory selected by `config`
pub async fn load_directory(config: &AuthConfig) -> Result<SharedDirectory, StartupError> {
    let database_url = match &config.database_url {
        Some(url) => url,
        None => {
            tracing::warn!("DATABASE_URL not set. Users will be kept in memory only.");
            return Ok(Arc::new(MemoryUserDirectory::new()));
        }
    };

    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(Arc::new(PgUserDirectory::new(pool)))
}
