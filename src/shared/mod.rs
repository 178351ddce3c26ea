//! Shared Module
//!
//! Types and rules that do not depend on the server stack: configuration,
//! credential field validation, and the validation error type. Everything
//! here compiles without the `ssr` feature.

/// Shared error types
pub mod error;

/// Email/password normalization and validation
pub mod credentials;

/// Application configuration
pub mod config;

pub use error::SharedError;
pub use config::{AuthConfig, AuthConfigBuilder, ConfigError};
