//! Server Module
//!
//! Server-side code for initializing and configuring the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - User directory selection (database or memory)
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # State Management
//!
//! `AppState` holds the user directory, the session issuer and the password
//! hasher. It is cloned per request; the directory and issuer sit behind
//! `Arc` so clones are cheap.
//!
//! # Example
//!
//! ```rust,no_run
//! use keygate::backend::server::create_app;
//! use keygate::shared::AuthConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AuthConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::StartupError;
pub use init::create_app;
pub use state::AppState;
