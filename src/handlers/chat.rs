use axum::{Json, extract::State};
use std::sync::Arc;

use crate::{
    capabilities,
    errors::ApiError,
    models::chat::{ChatCompletionRequest, ChatCompletionResult},
    state::AppState,
};

pub async fn completions(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ChatCompletionRequest>,
) -> Result<Json<ChatCompletionResult>, ApiError> {
    let result = capabilities::chat::complete(&state, payload).await?;
    Ok(Json(result))
}
