/**
 * User Model and Directory
 *
 * This module defines the stored user record and the `UserDirectory`
 * contract the handlers rely on, with two implementations:
 *
 * - `PgUserDirectory` - PostgreSQL via sqlx; email uniqueness is a table
 *   constraint and a violation surfaces as `DirectoryError::Conflict`
 * - `MemoryUserDirectory` - process-local map; check-and-insert runs under a
 *   single write lock
 *
 * Emails are stored exactly as given; callers pass them through
 * `shared::credentials::normalize_email` first.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// User struct representing a user in the database
#[derive(Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Normalized email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Inactive users can log in but cannot read their profile
    pub is_active: bool,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

// password_hash is deliberately absent.
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("is_active", &self.is_active)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

impl User {
    fn new(email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("email already registered")]
    Conflict,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage contract for user records
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DirectoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DirectoryError>;

    /// Create an active user. Fails with `Conflict` if the email is taken,
    /// including when another insert for the same email wins a race.
    async fn insert(&self, email: &str, password_hash: &str) -> Result<User, DirectoryError>;

    /// Flip the active flag. Returns `None` for an unknown id.
    async fn set_active(&self, id: Uuid, active: bool) -> Result<Option<User>, DirectoryError>;
}

const USER_COLUMNS: &str = "id, email, password_hash, is_active, created_at, updated_at";

/// PostgreSQL-backed directory
#[derive(Clone)]
pub struct PgUserDirectory {
    pool: PgPool,
}

impl PgUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DirectoryError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DirectoryError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert(&self, email: &str, password_hash: &str) -> Result<User, DirectoryError> {
        let user = User::new(email.to_string(), password_hash.to_string());

        let result = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users ({USER_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.is_active)
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(DirectoryError::Conflict),
            Err(e) => Err(e.into()),
        }
    }

    async fn set_active(&self, id: Uuid, active: bool) -> Result<Option<User>, DirectoryError> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
            SET is_active = $1, updated_at = $2
            WHERE id = $3
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(active)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

/// In-memory directory
#[derive(Default)]
pub struct MemoryUserDirectory {
    inner: RwLock<MemoryTables>,
}

#[derive(Default)]
struct MemoryTables {
    users: HashMap<Uuid, User>,
    by_email: HashMap<String, Uuid>,
}

impl MemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserDirectory for MemoryUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DirectoryError> {
        let tables = self.inner.read().await;
        Ok(tables
            .by_email
            .get(email)
            .and_then(|id| tables.users.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DirectoryError> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn insert(&self, email: &str, password_hash: &str) -> Result<User, DirectoryError> {
        let mut tables = self.inner.write().await;
        if tables.by_email.contains_key(email) {
            return Err(DirectoryError::Conflict);
        }

        let user = User::new(email.to_string(), password_hash.to_string());
        tables.by_email.insert(user.email.clone(), user.id);
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn set_active(&self, id: Uuid, active: bool) -> Result<Option<User>, DirectoryError> {
        let mut tables = self.inner.write().await;
        Ok(tables.users.get_mut(&id).map(|user| {
            user.is_active = active;
            user.updated_at = Utc::now();
            user.clone()
        }))
    }
}
