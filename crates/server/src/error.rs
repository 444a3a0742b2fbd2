//! Error-to-response mapping
//!
//! Wraps `AecError` so handlers can use `?` and still produce the HTTP
//! status and JSON body the browser client expects. Upstream failures relay
//! the upstream status and body unchanged.

use aecdash_common::auth::client::AuthClientError;
use aecdash_domain::AecError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::{json, Value};
use tracing::warn;

/// Handler-level error wrapper
#[derive(Debug)]
pub struct AppError(pub AecError);

/// Result alias for route handlers
pub type AppResult<T> = std::result::Result<T, AppError>;

impl From<AecError> for AppError {
    fn from(err: AecError) -> Self {
        Self(err)
    }
}

impl From<AuthClientError> for AppError {
    fn from(err: AuthClientError) -> Self {
        let mapped = match err {
            AuthClientError::Provider { payload, .. } => AecError::AuthExchange(payload),
            AuthClientError::RequestFailed(e) => AecError::Network(e.to_string()),
            AuthClientError::Parse(msg) => AecError::Internal(msg),
        };
        Self(mapped)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            AecError::Unauthenticated => {
                (StatusCode::UNAUTHORIZED, json!({ "error": "Not authenticated" }))
            }
            AecError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AecError::AuthExchange(payload) => {
                // The provider's rejection payload passes through when it is
                // itself JSON
                let body = serde_json::from_str::<Value>(&payload)
                    .unwrap_or_else(|_| json!({ "error": payload }));
                (StatusCode::BAD_REQUEST, body)
            }
            AecError::Upstream { status, body } => {
                let status =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                let body = serde_json::from_str::<Value>(&body)
                    .unwrap_or_else(|_| json!({ "error": body }));
                (status, body)
            }
            other => {
                warn!(error = %other, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": other.to_string() }))
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_maps_to_401() {
        let response = AppError(AecError::Unauthenticated).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_invalid_input_maps_to_400() {
        let response = AppError(AecError::InvalidInput("bad".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_status_is_relayed() {
        let err = AppError(AecError::Upstream { status: 503, body: "maintenance".to_string() });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_invalid_upstream_status_falls_back_to_502() {
        let err = AppError(AecError::Upstream { status: 42, body: String::new() });
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_provider_rejection_becomes_auth_exchange() {
        let err: AppError = AuthClientError::Provider {
            status: 400,
            payload: r#"{"error":"invalid_grant"}"#.to_string(),
        }
        .into();
        assert!(matches!(err.0, AecError::AuthExchange(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
