//! Common error type and HTTP mapping for the service.
//!
//! Internal detail (upstream status lines, transport errors) is logged
//! server-side; responses carry a user-safe label and message only.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Request body failed shape or length validation.
    #[error("{0}")]
    Validation(String),

    /// No credential configured, or the completion endpoint rejected ours.
    #[error("API key authentication failed")]
    Auth,

    /// Completion endpoint responded 429.
    #[error("Rate limit exceeded")]
    RateLimit,

    /// Completion endpoint unreachable or timed out.
    #[error("Network error: unable to connect to LLM service: {0}")]
    Network(#[source] reqwest::Error),

    /// Completion endpoint answered with an unexpected status or shape.
    #[error("LLM service error ({status}): {detail}")]
    Upstream { status: u16, detail: String },

    /// Transport failure outside connect/timeout (body read, decode).
    #[error(transparent)]
    HttpClient(#[from] reqwest::Error),

    /// Parsed analysis candidate was missing a required field.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                msg.clone(),
            ),
            AppError::Auth => (
                StatusCode::UNAUTHORIZED,
                "LLM API authentication failed",
                "Please check your API key configuration".to_string(),
            ),
            AppError::RateLimit => (
                StatusCode::TOO_MANY_REQUESTS,
                "Rate limit exceeded",
                "Please try again later".to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to analyze complaint",
                "An unexpected error occurred while processing your request".to_string(),
            ),
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }

        (status, Json(json!({ "error": error, "message": message }))).into_response()
    }
}
