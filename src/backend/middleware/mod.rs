//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - bearer-token extractor for protected routes

pub mod auth;

pub use auth::{bearer_token, AuthUser};
