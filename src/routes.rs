use crate::config::constants::MAX_UPLOAD_BYTES;
use crate::{handlers, state::AppState};
use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/chat", post(handlers::chat::completions))
        .route("/transcribe", post(handlers::transcription::transcribe))
        .route("/analyze-image", post(handlers::image::analyze))
        .route("/metrics", get(handlers::metrics::recent))
        .route("/health", get(|| async { "Working!" }))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
