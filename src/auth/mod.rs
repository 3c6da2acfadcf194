//! Authentication Module
//!
//! This module handles user registration and credential verification.
//! It provides the credential store abstraction, the authentication
//! service that owns the hashing policy, and the HTTP handlers.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── users.rs        - User model and CredentialStore trait
//! ├── postgres.rs     - PostgreSQL store implementation
//! ├── memory.rs       - In-memory store for tests and offline use
//! ├── service.rs      - Register/login business logic, bcrypt policy
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: fields validated → email checked → password hashed
//!    with bcrypt → record inserted (unique email index breaks races)
//! 2. **Login**: user looked up by email → password verified against the
//!    stored hash → name and email returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (cost 10) before storage
//! - Login failures never reveal whether the email exists
//! - Password hashes never leave the store layer

/// User model and credential store contract
pub mod users;

/// PostgreSQL credential store
pub mod postgres;

/// In-memory credential store
pub mod memory;

/// Registration and login business logic
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{login, register};
pub use service::{AuthService, AuthenticatedUser};
pub use users::{CredentialStore, NewUser, StoreError, User};
