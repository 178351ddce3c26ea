//! Database test fixtures
//!
//! PostgreSQL-backed tests run only when `DATABASE_URL` is set; without it
//! `create_test_pool` returns `None` and the caller skips.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Connect to `DATABASE_URL`, or `None` when it is not configured
pub async fn create_test_pool() -> Option<PgPool> {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) if !url.trim().is_empty() => url,
        _ => {
            eprintln!("DATABASE_URL not set; skipping PostgreSQL test");
            return None;
        }
    };

    let pool = PgPoolOptions::new()
        .max_connections(16)
        .connect(&database_url)
        .await
        .expect("Failed to create test database pool");
    Some(pool)
}

/// Run database migrations for testing
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Test database fixture: a migrated pool
pub struct TestDatabase {
    pool: PgPool,
}

impl TestDatabase {
    pub async fn new() -> Option<Self> {
        let pool = create_test_pool().await?;
        run_migrations(&pool)
            .await
            .expect("Failed to run migrations");
        Some(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
