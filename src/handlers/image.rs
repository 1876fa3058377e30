use axum::{Json, extract::State};
use std::sync::Arc;

use crate::{
    capabilities,
    errors::ApiError,
    models::image::{ImageAnalysis, ImageAnalysisRequest},
    state::AppState,
};

pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ImageAnalysisRequest>,
) -> Result<Json<ImageAnalysis>, ApiError> {
    let result = capabilities::image::analyze(&state, payload).await?;
    Ok(Json(result))
}
