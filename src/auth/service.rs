/**
 * Authentication Service
 *
 * This module implements the registration and login business logic over
 * an injected credential store. It is the sole owner of the password
 * hashing policy.
 *
 * # Registration Process
 *
 * 1. Validate that name, email and password are all non-empty
 * 2. Check whether the email is already registered
 * 3. Hash the password with bcrypt (cost 10, random salt per call)
 * 4. Insert the record; a lost insert race surfaces exactly like the
 *    pre-check hit
 *
 * # Login Process
 *
 * 1. Look up the user by email
 * 2. Verify the password against the stored hash with bcrypt
 * 3. Return only name and email on success
 *
 * # Security
 *
 * - The same plaintext hashed twice yields different stored hashes
 *   (per-call random salt)
 * - Password verification goes through bcrypt's own comparison, never a
 *   manual string compare
 * - Login failures use one message for "no such user" and "wrong
 *   password" to prevent account enumeration
 */
use std::sync::Arc;

use crate::auth::users::{CredentialStore, NewUser};
use crate::error::AuthError;

/// bcrypt work factor for password hashing
const HASH_COST: u32 = 10;

/// User data returned by a successful login
///
/// Carries only what the front end may display; never the password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub name: String,
    pub email: String,
}

/// Registration and credential verification over a credential store
///
/// The store is injected at construction time so tests can substitute
/// the in-memory implementation. The service holds no other state; each
/// call is an independent single-pass pipeline.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
}

impl AuthService {
    /// Create a service over the given credential store
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Register a new user
    ///
    /// # Arguments
    ///
    /// * `name` - Display name, required
    /// * `email` - Unique email address, required
    /// * `password` - Plaintext password, hashed before storage
    ///
    /// # Errors
    ///
    /// * `AuthError::MissingFields` - any input is empty; nothing is stored
    /// * `AuthError::AlreadyExists` - the email is taken, whether detected
    ///   by the pre-check or by losing the insert race
    /// * `AuthError::Store` / `AuthError::Hash` - infrastructure faults
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        if self.store.find_by_email(email).await?.is_some() {
            tracing::warn!("Registration rejected, email already exists: {email}");
            return Err(AuthError::AlreadyExists);
        }

        let password_hash = bcrypt::hash(password, HASH_COST)?;

        // The unique constraint in the store is the real uniqueness
        // guarantee; the pre-check above only gives the common case a
        // friendlier path. From<StoreError> folds a lost race into the
        // same AlreadyExists outcome.
        self.store
            .insert(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        tracing::info!("User registered: {email}");
        Ok(())
    }

    /// Verify credentials and return the user's public profile
    ///
    /// Empty inputs are not validated separately; they simply fail
    /// verification like any other wrong credential.
    ///
    /// # Errors
    ///
    /// * `AuthError::InvalidCredentials` - unknown email or wrong
    ///   password, indistinguishable by design
    /// * `AuthError::Store` / `AuthError::Hash` - infrastructure faults
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthenticatedUser, AuthError> {
        let user = match self.store.find_by_email(email).await? {
            Some(user) => user,
            None => {
                tracing::warn!("Login failed, unknown email: {email}");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let valid = bcrypt::verify(password, &user.password_hash)?;
        if !valid {
            tracing::warn!("Login failed, wrong password: {email}");
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!("User logged in: {email}");
        Ok(AuthenticatedUser {
            name: user.name,
            email: user.email,
        })
    }
}
