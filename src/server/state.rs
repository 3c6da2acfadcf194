/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits Axum uses for state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container. It holds the
 * `AuthService`, which in turn owns the injected credential store.
 * There is no other cross-request state: each register/login call is an
 * independent unit of work.
 *
 * # State Extraction
 *
 * The `FromRef` implementation lets handlers extract
 * `State<AuthService>` directly instead of taking the whole `AppState`,
 * following Axum's recommended substate pattern.
 */
use axum::extract::FromRef;

use crate::auth::service::AuthService;

/// Application state shared across all request handlers
///
/// Cloning is cheap: the contained service holds its store behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Registration and login business logic over the credential store
    pub auth: AuthService,
}

impl AppState {
    /// Create application state around an authentication service
    pub fn new(auth: AuthService) -> Self {
        Self { auth }
    }
}

/// Allow handlers to extract `State<AuthService>` from `AppState`
impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}
