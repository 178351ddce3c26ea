//! Application configuration module
//!
//! `AuthConfig` carries everything the server needs at startup: the token
//! signing secret, the bcrypt work factor, the token lifetime, and where to
//! persist users. It is built once and handed to the server; nothing reads
//! process-global state after that.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Minimum accepted length of the token signing secret, in bytes
pub const MIN_SECRET_BYTES: usize = 32;

/// Matches `bcrypt::DEFAULT_COST`
pub const DEFAULT_BCRYPT_COST: u32 = 12;

pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

pub const DEFAULT_PORT: u16 = 3000;

/// Authentication server configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret used to sign session tokens
    pub jwt_secret: String,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// How long an issued token stays valid
    pub token_ttl: Duration,
    /// PostgreSQL URL; `None` selects the in-memory directory
    pub database_url: Option<String>,
    /// Listen port
    pub port: u16,
}

// Hand-written so the secret never reaches a log line.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("token_ttl", &self.token_ttl)
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("port", &self.port)
            .finish()
    }
}

impl AuthConfig {
    /// Create a new AuthConfigBuilder
    pub fn builder() -> AuthConfigBuilder {
        AuthConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.len() < MIN_SECRET_BYTES {
            return Err(ConfigError::WeakSecret(MIN_SECRET_BYTES));
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        if self.token_ttl.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_SECS",
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    /// Load configuration from the environment (and `.env`, if present).
    ///
    /// | Variable         | Required | Default |
    /// |------------------|----------|---------|
    /// | `JWT_SECRET`     | yes      |         |
    /// | `BCRYPT_COST`    | no       | 12      |
    /// | `TOKEN_TTL_SECS` | no       | 86400   |
    /// | `DATABASE_URL`   | no       | in-memory directory |
    /// | `SERVER_PORT`    | no       | 3000    |
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingValue("JWT_SECRET"))?;

        let mut builder = AuthConfig::builder().jwt_secret(jwt_secret);

        if let Some(cost) = parse_env::<u32>("BCRYPT_COST")? {
            builder = builder.bcrypt_cost(cost);
        }
        if let Some(secs) = parse_env::<u64>("TOKEN_TTL_SECS")? {
            builder = builder.token_ttl(Duration::from_secs(secs));
        }
        if let Some(port) = parse_env::<u16>("SERVER_PORT")? {
            builder = builder.port(port);
        }
        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.trim().is_empty() {
                builder = builder.database_url(url);
            }
        }

        builder.build()
    }
}

#[cfg(feature = "ssr")]
fn parse_env<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        Err(_) => Ok(None),
    }
}

/// Builder for AuthConfig
#[derive(Debug, Default)]
pub struct AuthConfigBuilder {
    jwt_secret: Option<String>,
    bcrypt_cost: Option<u32>,
    token_ttl: Option<Duration>,
    database_url: Option<String>,
    port: Option<u16>,
}

impl AuthConfigBuilder {
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = Some(ttl);
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AuthConfig, ConfigError> {
        let config = AuthConfig {
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
            token_ttl: self.token_ttl.unwrap_or(DEFAULT_TOKEN_TTL),
            database_url: self.database_url,
            port: self.port.unwrap_or(DEFAULT_PORT),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("JWT_SECRET must be at least {0} bytes")]
    WeakSecret(usize),
}
