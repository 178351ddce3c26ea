//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, fallback and tracing layer
//! └── api_routes.rs   - API endpoint handlers
//! ```
//!
//! # Routes
//!
//! - `POST /api/register` - User registration
//! - `POST /api/login` - User login
//! - `GET /api/profile` - Current user (requires `Authorization: Bearer <token>`)
//! - `GET|POST /api/hello` - Connectivity check
//!
//! Any other path answers `404` with a `{"message": ...}` body.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use keygate::backend::auth::users::MemoryUserDirectory;
//! use keygate::backend::routes::create_router;
//! use keygate::backend::server::state::AppState;
//! use keygate::shared::AuthConfig;
//!
//! let config = AuthConfig::builder()
//!     .jwt_secret("0123456789abcdef0123456789abcdef")
//!     .build()
//!     .unwrap();
//! let state = AppState::new(&config, Arc::new(MemoryUserDirectory::new()));
//! let app = create_router(state);
//! ```

/// Main router creation
pub mod router;

/// API route configuration
pub mod api_routes;

pub use router::create_router;
