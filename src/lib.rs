//! keygate - Main Library
//!
//! keygate is a small authentication service: clients register with an
//! email and password, log in to receive a signed bearer token, and present
//! that token to read their own profile.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that do not need the server stack
//!   - Configuration (`AuthConfig`)
//!   - Email normalization and credential validation
//!   - Validation error type
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server and routes
//!   - bcrypt password hashing, JWT sessions
//!   - User directory (PostgreSQL or in-memory)
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - enables the `backend` module and the
//!   `keygate-server` binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use keygate::backend::server::create_app;
//! use keygate::shared::AuthConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AuthConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and configuration
pub mod shared;

/// Backend server code (only compiled with `ssr` feature)
#[cfg(feature = "ssr")]
pub mod backend;
