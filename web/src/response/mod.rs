//! JSON envelopes returned by every endpoint.
//!
//! Handlers and the error mapping build their responses through [`json`] so the status,
//! body and `Content-Type: application/json` are set in one place. CORS headers are added
//! on the way out by `middleware::cors`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Serializes `payload` as the JSON body of a response with the given status.
pub fn json<T: Serialize>(status: StatusCode, payload: &T) -> Response {
    (status, Json(payload)).into_response()
}

/// Body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorEnvelope {
    pub error: String,
    /// The provider's own error body, when the provider rejected the exchange.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<Value>,
}

impl ErrorEnvelope {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
            details: None,
        }
    }

    pub fn with_details(error: &str, details: Value) -> Self {
        Self {
            error: error.to_string(),
            details: Some(details),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}
