/**
 * API Route Handlers
 *
 * This module registers the authentication endpoints:
 *
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login
 *
 * Both routes are public; there is no token issuance or protected
 * surface in this service.
 */
use axum::Router;

use crate::auth::{login, register};
use crate::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with authentication routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/auth/register", axum::routing::post(register))
        .route("/api/auth/login", axum::routing::post(login))
}
