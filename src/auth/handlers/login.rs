/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Delegate lookup and bcrypt verification to the authentication service
 * 2. Return the user's name and email on success
 *
 * # Security
 *
 * - Unknown email and wrong password return the identical message
 *   (no account enumeration)
 * - The password hash never appears in the response
 * - Empty credentials are not validated separately; they simply fail
 *   verification
 *
 * # Example Request
 *
 * ```http
 * POST /api/auth/login HTTP/1.1
 * Content-Type: application/json
 *
 * {
 *   "email": "a@pes.edu",
 *   "password": "secret1"
 * }
 * ```
 *
 * # Example Response
 *
 * ```json
 * {
 *   "message": "Login successful",
 *   "user": { "name": "Ann", "email": "a@pes.edu" }
 * }
 * ```
 */
use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{LoginRequest, LoginResponse, UserResponse};
use crate::auth::service::AuthService;
use crate::error::AuthError;

/// Login handler
///
/// # Arguments
///
/// * `State(auth)` - Authentication service from application state
/// * `Json(request)` - Login request with email and password
///
/// # Errors
///
/// * `400 Bad Request` - "Invalid email or password"
/// * `500 Internal Server Error` - "Server error" for any store or hash fault
pub async fn login(
    State(auth): State<AuthService>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    tracing::info!("Login request for email: {}", request.email);

    let user = auth.login(&request.email, &request.password).await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user: UserResponse {
            name: user.name,
            email: user.email,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::memory::MemoryCredentialStore;
    use std::sync::Arc;

    async fn auth_with_ann() -> AuthService {
        let auth = AuthService::new(Arc::new(MemoryCredentialStore::new()));
        auth.register("Ann", "a@pes.edu", "secret1").await.unwrap();
        auth
    }

    fn request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_success_returns_profile() {
        let auth = auth_with_ann().await;

        let result = login(State(auth), Json(request("a@pes.edu", "secret1"))).await;

        let body = result.unwrap();
        assert_eq!(body.message, "Login successful");
        assert_eq!(body.user.name, "Ann");
        assert_eq!(body.user.email, "a@pes.edu");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let auth = auth_with_ann().await;

        let result = login(State(auth), Json(request("a@pes.edu", "wrong"))).await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let auth = auth_with_ann().await;

        let result = login(State(auth), Json(request("nobody@pes.edu", "secret1"))).await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_response_never_contains_password_hash() {
        let auth = auth_with_ann().await;

        let body = login(State(auth), Json(request("a@pes.edu", "secret1")))
            .await
            .unwrap();

        let json = serde_json::to_value(&body.0).unwrap();
        let user = json.get("user").unwrap().as_object().unwrap();
        assert_eq!(user.len(), 2);
        assert!(user.contains_key("name"));
        assert!(user.contains_key("email"));
        assert!(!json.to_string().contains("$2"));
    }
}
