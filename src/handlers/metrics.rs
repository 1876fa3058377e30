use axum::{Json, extract::State};
use std::sync::Arc;

use crate::{capabilities, models::metrics::PerformanceMetricSample, state::AppState};

/// Metrics never answer with an error status; failures degrade to demo data.
pub async fn recent(State(state): State<Arc<AppState>>) -> Json<Vec<PerformanceMetricSample>> {
    Json(capabilities::metrics::fetch_recent(&state).await)
}
