/**
 * Error Conversion
 *
 * This module converts `AuthError` values into HTTP responses so handlers
 * can return them directly with `?`.
 *
 * # Response Format
 *
 * Error responses are JSON with the fixed user-facing message:
 * ```json
 * { "message": "Invalid email or password" }
 * ```
 *
 * Infrastructure faults are logged server-side with their full error
 * chain before being collapsed into the opaque "Server error" body.
 */
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::AuthError;

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            match &self {
                AuthError::Store(source) => tracing::error!("Store failure: {source}"),
                AuthError::Hash(source) => tracing::error!("Hash failure: {source}"),
                _ => {}
            }
        }

        let body = serde_json::json!({ "message": self.message() });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::users::StoreError;
    use axum::body::to_bytes;

    async fn body_json(err: AuthError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_missing_fields_response() {
        let (status, body) = body_json(AuthError::MissingFields).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "message": "Missing fields" }));
    }

    #[tokio::test]
    async fn test_server_error_response_is_opaque() {
        let err = AuthError::Store(StoreError::Backend(sqlx::Error::PoolClosed));
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "message": "Server error" }));
    }
}
