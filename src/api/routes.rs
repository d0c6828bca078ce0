//! Router assembly and shared application state.
use std::sync::Arc;

use axum::http::header::{HeaderValue, X_CONTENT_TYPE_OPTIONS};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::analysis::ComplaintAnalyzer;
use crate::api::handlers;

pub struct AppState {
    pub analyzer: ComplaintAnalyzer,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/summarize", post(handlers::summarize))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(CorsLayer::permissive())
        .layer(SetResponseHeaderLayer::overriding(
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .with_state(state)
}
