//! Backend Module
//!
//! This module contains all server-side code for keygate: an Axum HTTP
//! service that registers users, verifies their passwords and issues
//! bearer tokens.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, directory selection
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Password hashing, sessions, user directory, handlers
//! - **`middleware`** - Bearer token extraction
//! - **`error`** - Backend error type and its HTTP mapping
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. Each variant maps to one HTTP
//! status and every error body has the shape `{"message": "..."}`. Internal
//! failures are logged with their cause and answered with a generic message.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

pub use error::BackendError;
pub use server::create_app;
