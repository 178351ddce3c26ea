//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - User registration handler
//! ├── login.rs     - User authentication handler
//! ├── profile.rs   - Current user handler (bearer token)
//! └── hello.rs     - Connectivity check
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/register - 201 with the new user
//! - **`login`** - POST /api/login - token and user
//! - **`profile`** - GET /api/profile - current user
//! - **`hello`** - GET|POST /api/hello
//!
//! # Example
//!
//! ```rust,no_run
//! use keygate::backend::auth::handlers::{login, profile, register};
//! use keygate::backend::server::state::AppState;
//! use axum::{routing::{get, post}, Router};
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/api/register", post(register))
//!     .route("/api/login", post(login))
//!     .route("/api/profile", get(profile));
//! ```

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Current user handler
pub mod profile;

/// Connectivity check
pub mod hello;

pub use types::{AuthResponse, LoginRequest, MessageResponse, RegisterRequest, UserResponse};

pub use hello::hello;
pub use login::login;
pub use profile::profile;
pub use register::register;
