//! Authentication Module
//!
//! Registration, login, and bearer-token identification of users.
//!
//! # Architecture
//!
//! - **`passwords`** - bcrypt hashing and verification
//! - **`users`** - user record and the `UserDirectory` storage contract
//! - **`sessions`** - JWT issuance and verification
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: email + password → password hashed → user stored → 201 with user
//! 2. **Login**: email + password → user looked up → password verified → token returned
//! 3. **Profile**: bearer token → token verified → active user looked up → user returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage; digests never leave the server
//! - Tokens are HS256 JWTs with a configurable lifetime
//! - Unknown email and wrong password are indistinguishable to the client
//! - Emails are compared case-insensitively

/// Password hashing
pub mod passwords;

/// User data model and directory implementations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use handlers::{hello, login, profile, register};
pub use passwords::PasswordHasher;
pub use sessions::{SessionError, SessionIssuer};
pub use users::{DirectoryError, MemoryUserDirectory, PgUserDirectory, User, UserDirectory};
