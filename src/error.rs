//! Error types for the gateway
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

// == Gateway Error Enum ==
/// Every way a gateway operation can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Credential did not match the configured secret
    #[error("Unauthorized")]
    Unauthorized,

    /// Key absent from the requested database
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Store connectivity, protocol or decoding failure, message passed through
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl GatewayError {
    /// HTTP status the error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Unauthorized => StatusCode::UNAUTHORIZED,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string()
        }));

        (self.status(), body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the gateway.
pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(GatewayError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            GatewayError::NotFound("a".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            GatewayError::Store(StoreError::new("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_message_passed_through() {
        let err: GatewayError = StoreError::new("Connection refused (os error 111)").into();
        assert_eq!(err.to_string(), "Connection refused (os error 111)");
    }

    #[test]
    fn test_not_found_names_key() {
        let err = GatewayError::NotFound("session:42".to_string());
        assert_eq!(err.to_string(), "Key not found: session:42");
    }

    #[tokio::test]
    async fn test_into_response_body() {
        let response = GatewayError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "Unauthorized");
    }
}
