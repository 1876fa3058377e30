use axum::{
    Json,
    extract::{Multipart, State},
};
use std::sync::Arc;

use crate::{
    capabilities, errors::ApiError, models::transcription::Transcription, state::AppState,
};

/// Pulls the `file` field out of the multipart body and hands its bytes to
/// the transcription capability. A missing or empty field fails validation
/// there.
pub async fn transcribe(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<Transcription>, ApiError> {
    let mut audio = Vec::new();
    let mut filename = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(format!("invalid multipart payload: {e}")))?
    {
        if field.name() == Some("file") {
            filename = field.file_name().map(str::to_string);
            audio = field
                .bytes()
                .await
                .map_err(|e| ApiError::Validation(format!("invalid multipart payload: {e}")))?
                .to_vec();
        }
    }

    let result = capabilities::transcription::transcribe(&state, audio, filename).await?;
    Ok(Json(result))
}
