/**
 * Router Configuration
 *
 * This module provides the main router creation function.
 *
 * # Route Order
 *
 * 1. API routes (authentication)
 * 2. Static files (built front-end bundle)
 * 3. Fallback handler (404)
 *
 * # Middleware
 *
 * A permissive CORS layer is applied so the separately hosted front end
 * can call the API during development.
 */
use axum::http::StatusCode;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the authentication service
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    // Add API routes
    let router = configure_api_routes(router);

    // Serve the built front-end bundle
    let router = router.nest_service("/static", ServeDir::new("public"));

    // Fallback handler for 404
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    router.layer(CorsLayer::permissive()).with_state(app_state)
}
