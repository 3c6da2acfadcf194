//! Error Module
//!
//! This module defines the authentication error taxonomy and its HTTP
//! response conversion.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - AuthError definition, status and message mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! All variants map to fixed user-facing messages; infrastructure detail
//! stays in the server logs.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::AuthError;
