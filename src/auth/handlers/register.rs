/**
 * Register Handler
 *
 * This module implements the user registration handler for
 * POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate that name, email and password are present
 * 2. Delegate to the authentication service (existence check, bcrypt
 *    hash, insert)
 * 3. Return 201 with a fixed success message
 *
 * # Errors
 *
 * * `400 Bad Request` - "Missing fields" or "User already exists"
 * * `500 Internal Server Error` - "Server error" for any store or hash fault
 *
 * # Example Request
 *
 * ```http
 * POST /api/auth/register HTTP/1.1
 * Content-Type: application/json
 *
 * {
 *   "name": "Ann",
 *   "email": "a@pes.edu",
 *   "password": "secret1"
 * }
 * ```
 *
 * # Example Response
 *
 * ```json
 * { "message": "Registration successful" }
 * ```
 */
use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::handlers::types::{MessageResponse, RegisterRequest};
use crate::auth::service::AuthService;
use crate::error::AuthError;

/// Register handler
///
/// # Arguments
///
/// * `State(auth)` - Authentication service from application state
/// * `Json(request)` - Registration request with name, email and password
pub async fn register(
    State(auth): State<AuthService>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AuthError> {
    tracing::info!("Registration request for email: {}", request.email);

    auth.register(&request.name, &request.email, &request.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Registration successful".to_string(),
        }),
    ))
}
