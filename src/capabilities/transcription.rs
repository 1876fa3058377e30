use crate::errors::ApiError;
use crate::models::transcription::Transcription;
use crate::state::AppState;

pub async fn transcribe(
    state: &AppState,
    audio: Vec<u8>,
    filename: Option<String>,
) -> Result<Transcription, ApiError> {
    if audio.is_empty() {
        return Err(ApiError::Validation("Audio file is required".to_string()));
    }

    let groq = state.groq().await?;
    groq.transcribe(audio, filename).await
}
