/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers.
 *
 * Request fields use `#[serde(default)]` so an absent field deserializes
 * to an empty string instead of rejecting the request body: the service
 * treats empty and absent the same way.
 */
use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// User's display name
    #[serde(default)]
    pub name: String,
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// User's password (hashed before storage)
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// User's password (verified against the stored hash)
    #[serde(default)]
    pub password: String,
}

/// Message-only response body, used by registration and all errors
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

/// Successful login response
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    /// Fixed success message
    pub message: String,
    /// User information safe to return to clients
    pub user: UserResponse,
}

/// User information without sensitive data
///
/// Never carries the password hash.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    pub name: String,
    pub email: String,
}
