//! Common test utilities and helpers
//!
//! - In-process test server backed by an in-memory directory
//! - Authentication test helpers
//! - PostgreSQL fixtures (used when `DATABASE_URL` is set)

#![allow(dead_code)]

pub mod auth_helpers;
pub mod database;

pub use auth_helpers::*;
pub use database::*;
