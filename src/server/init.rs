/**
 * Server Initialization
 *
 * This module assembles the Axum application from an injected credential
 * store. The store is a constructor argument rather than a module-level
 * singleton so that tests (and offline development) can substitute the
 * in-memory implementation for PostgreSQL.
 *
 * # Initialization Process
 *
 * 1. Wrap the store in an `AuthService` (owner of the hashing policy)
 * 2. Build the shared `AppState`
 * 3. Create the router with all routes and middleware
 */
use axum::Router;
use std::sync::Arc;

use crate::auth::users::CredentialStore;
use crate::auth::service::AuthService;
use crate::routes::router::create_router;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `store` - Credential store backing registration and login. Production
///   passes `PgCredentialStore`; tests pass `MemoryCredentialStore`.
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_app(store: Arc<dyn CredentialStore>) -> Router<()> {
    tracing::info!("Initializing Campus Hub backend server");

    let auth = AuthService::new(store);
    let app_state = AppState::new(auth);

    create_router(app_state)
}
