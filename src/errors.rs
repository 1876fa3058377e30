use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Closed failure taxonomy for the gateway; each variant maps to one
/// response status.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required configuration is missing or unusable.
    #[error("{0}")]
    Configuration(String),
    /// The caller's request violates a precondition. Never retried.
    #[error("{0}")]
    Validation(String),
    /// The provider rejected the call, was unreachable, or answered with a
    /// payload that could not be decoded.
    #[error("{message}")]
    Upstream {
        status: Option<StatusCode>,
        message: String,
    },
}

impl ApiError {
    pub fn upstream(message: impl Into<String>) -> Self {
        ApiError::Upstream {
            status: None,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Configuration(message) => {
                error!("configuration error: {message}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Upstream { status, message } => {
                error!(upstream_status = ?status, "upstream request failed: {message}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
