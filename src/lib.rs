//! Campus Hub Backend
//!
//! Backend server for the Campus Hub web application. The single-page
//! front end (campus info pages, map, local profile/scheduler) is a static
//! bundle; everything dynamic goes through the authentication API served
//! from this crate.
//!
//! # Overview
//!
//! The crate provides:
//! - Axum HTTP server setup and configuration
//! - Registration and login endpoints backed by a credential store
//! - bcrypt password hashing and verification
//! - PostgreSQL persistence with an in-memory store for tests
//!
//! # Architecture
//!
//! The crate is organized into focused modules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential store, authentication service, HTTP handlers
//! - **`error`** - Error types and HTTP response conversion
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── lib.rs          - Crate root and exports
//! ├── main.rs         - Server binary entry point
//! ├── server/         - Initialization, state, configuration
//! ├── routes/         - Route configuration
//! ├── auth/           - Store, service, handlers
//! └── error/          - Error types
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (cost 10) before storage
//! - Login failures never reveal whether the email exists
//! - Password hashes never appear in responses or logs

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication, credential store, user management
pub mod auth;

/// Error types and HTTP conversion
pub mod error;

// Re-export commonly used types
pub use auth::service::AuthService;
pub use error::AuthError;
pub use server::create_app;
