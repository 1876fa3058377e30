use crate::errors::ApiError;
use crate::models::chat::{ChatCompletionRequest, ChatCompletionResult};
use crate::state::AppState;

/// Validates the conversation and forwards it to Groq. The returned `model`
/// is the one the provider echoes, which may differ from the requested id.
pub async fn complete(
    state: &AppState,
    request: ChatCompletionRequest,
) -> Result<ChatCompletionResult, ApiError> {
    if request.messages.is_empty() {
        return Err(ApiError::Validation("Invalid messages format".to_string()));
    }
    if request.model.is_empty() {
        return Err(ApiError::Validation("Model is required".to_string()));
    }

    let groq = state.groq().await?;
    let completion = groq.chat_completions(request.into()).await?;

    Ok(ChatCompletionResult {
        content: completion.first_content(),
        model: completion.model,
        usage: completion.usage,
    })
}
