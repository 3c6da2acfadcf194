/**
 * Authentication Error Types
 *
 * This module defines the error taxonomy for the authentication API.
 * Every error maps to a fixed user-facing message and status code; no
 * variant ever exposes stack traces, internal identifiers or
 * store-specific error text to the caller.
 *
 * # Error Categories
 *
 * - `MissingFields` - a required registration field was empty or absent
 * - `AlreadyExists` - a record with the requested email already exists
 * - `InvalidCredentials` - unknown email or wrong password; the two cases
 *   are deliberately indistinguishable
 * - `Store` / `Hash` - infrastructure faults, surfaced uniformly as an
 *   opaque "Server error"
 */
use axum::http::StatusCode;
use thiserror::Error;

use crate::auth::users::StoreError;

/// Errors raised by the authentication service and its handlers
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required registration field was empty or absent
    #[error("Missing fields")]
    MissingFields,

    /// A user with the requested email already exists
    ///
    /// Raised both by the pre-insert existence check and by a lost insert
    /// race; the two paths are observably identical to the caller.
    #[error("User already exists")]
    AlreadyExists,

    /// Unknown email or wrong password
    ///
    /// One variant for both cases so that login responses never reveal
    /// whether an email is registered.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Credential store infrastructure fault
    #[error("Server error")]
    Store(#[source] StoreError),

    /// Password hashing or verification fault
    #[error("Server error")]
    Hash(#[from] bcrypt::BcryptError),
}

impl AuthError {
    /// Get the HTTP status code for this error
    ///
    /// Validation and business-rule failures are 400; infrastructure
    /// faults are 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFields => StatusCode::BAD_REQUEST,
            Self::AlreadyExists => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::Store(_) | Self::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the fixed user-facing message for this error
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingFields => "Missing fields",
            Self::AlreadyExists => "User already exists",
            Self::InvalidCredentials => "Invalid email or password",
            Self::Store(_) | Self::Hash(_) => "Server error",
        }
    }
}

/// Map store errors into the authentication taxonomy
///
/// `DuplicateEmail` becomes `AlreadyExists` so a lost insert race and a
/// pre-check hit produce the same outcome; everything else is an
/// infrastructure fault.
impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => Self::AlreadyExists,
            other => Self::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(AuthError::MissingFields.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::AlreadyExists.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_messages_are_fixed() {
        assert_eq!(AuthError::MissingFields.message(), "Missing fields");
        assert_eq!(AuthError::AlreadyExists.message(), "User already exists");
        assert_eq!(
            AuthError::InvalidCredentials.message(),
            "Invalid email or password"
        );
    }

    #[test]
    fn test_duplicate_email_becomes_already_exists() {
        let err: AuthError = StoreError::DuplicateEmail.into();
        assert!(matches!(err, AuthError::AlreadyExists));
    }

    #[test]
    fn test_backend_fault_is_opaque_server_error() {
        let err: AuthError = StoreError::Backend(sqlx::Error::PoolClosed).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Server error");
    }
}
