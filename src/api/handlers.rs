//! Axum request handlers for the HTTP API.
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::analysis::types::AnalysisResult;
use crate::api::routes::AppState;
use crate::error::{AppError, AppResult};

pub const SERVICE_NAME: &str = "Customer Complaint Analyzer";
const MAX_MESSAGE_CHARS: usize = 5000;

pub async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> AppResult<Json<AnalysisResult>> {
    let message = validate_message(&payload)?;
    let request_id = Uuid::new_v4();
    tracing::info!(
        %request_id,
        preview = %message.chars().take(100).collect::<String>(),
        "processing complaint"
    );

    let analysis = state.analyzer.analyze(message).await.map_err(|e| {
        tracing::error!(%request_id, error = %e, "complaint analysis failed");
        e
    })?;

    tracing::info!(%request_id, "analysis completed");
    Ok(Json(analysis))
}

fn validate_message(payload: &Value) -> Result<&str, AppError> {
    let value = payload
        .get("message")
        .filter(|v| !v.is_null())
        .ok_or_else(|| AppError::Validation("Message field is required".to_string()))?;
    let message = value
        .as_str()
        .ok_or_else(|| AppError::Validation("Message must be a string".to_string()))?;
    if message.trim().is_empty() {
        return Err(AppError::Validation("Message cannot be empty".to_string()));
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(AppError::Validation(
            "Message too long (max 5000 characters)".to_string(),
        ));
    }
    // The analysis pipeline works on the trimmed text
    Ok(message.trim())
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339(),
        "service": SERVICE_NAME,
    }))
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Endpoint not found",
            "availableEndpoints": ["/api/summarize", "/health"],
        })),
    )
}
