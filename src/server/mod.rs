//! Server Module
//!
//! This module contains the code for initializing and configuring the
//! Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading (database URL, port)
//! └── init.rs         - Application assembly from an injected store
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env` reads
//!    `DATABASE_URL` (required) and `PORT` (default 5000)
//! 2. **Database Connection**: `connect_database` opens the pool and runs
//!    migrations; failure is fatal
//! 3. **App Assembly**: `create_app` wires the store into the service,
//!    state and router

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::create_app;
pub use state::AppState;
