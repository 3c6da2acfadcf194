/**
 * User Model and Credential Store Contract
 *
 * This module defines the persistent user record and the `CredentialStore`
 * trait that the authentication service depends on.
 *
 * # Store Contract
 *
 * - `find_by_email` treats absence as a normal result (`Ok(None)`), never
 *   as an error.
 * - `insert` is atomic with respect to email uniqueness: when two inserts
 *   race on the same email, exactly one succeeds and the loser observes
 *   `StoreError::DuplicateEmail`. The store is the sole linearization
 *   point; callers never take application-level locks.
 *
 * # Security
 *
 * `User` deliberately does not implement `Serialize`: the password hash
 * must never end up in a response body. Handlers build their own response
 * types from the fields they are allowed to expose.
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// User record as persisted by the credential store
#[derive(Debug, Clone)]
pub struct User {
    /// Surrogate id, internal only
    pub id: uuid::Uuid,
    /// Display name, required, not unique
    pub name: String,
    /// Email address; globally unique, case-sensitive as stored
    pub email: String,
    /// bcrypt hash of the password; never the plaintext
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// New user record to be inserted
///
/// The store assigns the surrogate id and timestamp on insert.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Errors raised by credential store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// The uniqueness constraint on `email` was violated
    #[error("a user with this email already exists")]
    DuplicateEmail,

    /// Any other backend fault (connection loss, query failure)
    ///
    /// Surfaced to HTTP callers as an opaque 500; the detail is only logged.
    #[error("credential store error: {0}")]
    Backend(#[from] sqlx::Error),
}

/// Durable mapping from email to user record
///
/// Implementations own storage and uniqueness enforcement. The
/// authentication service never mutates records directly, only through
/// these two operations.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up a user by email
    ///
    /// Returns `Ok(None)` when no record exists; "not found" is not an
    /// error.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Insert a new user record
    ///
    /// Atomic with respect to the email uniqueness invariant: a duplicate
    /// email fails with `StoreError::DuplicateEmail` and leaves no record
    /// behind.
    async fn insert(&self, user: NewUser) -> Result<User, StoreError>;
}
