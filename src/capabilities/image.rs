use crate::config::constants::{DEFAULT_TEMPERATURE, IMAGE_ANALYSIS_MODEL};
use crate::errors::ApiError;
use crate::models::content::{
    ChatCompletionMessage, ChatMessageContent, ChatMessageContentPart, ChatRole, ImageUrlPart,
};
use crate::models::image::{ImageAnalysis, ImageAnalysisRequest};
use crate::providers::groq::GroqChatRequest;
use crate::state::AppState;

/// Describes an image by submitting a single user turn with a text part and
/// an image-reference part to a multimodal-capable model.
pub async fn analyze(
    state: &AppState,
    request: ImageAnalysisRequest,
) -> Result<ImageAnalysis, ApiError> {
    if request.image_url.is_empty() || request.prompt.is_empty() {
        return Err(ApiError::Validation(
            "Image URL and prompt are required".to_string(),
        ));
    }

    let message = ChatCompletionMessage {
        role: ChatRole::User,
        content: ChatMessageContent::Array(vec![
            ChatMessageContentPart::Text {
                text: request.prompt,
            },
            ChatMessageContentPart::ImageUrl {
                image_url: ImageUrlPart {
                    url: request.image_url,
                },
            },
        ]),
    };
    let payload = GroqChatRequest {
        model: IMAGE_ANALYSIS_MODEL.to_string(),
        messages: vec![message],
        temperature: DEFAULT_TEMPERATURE,
        max_tokens: None,
    };

    let groq = state.groq().await?;
    let completion = groq.chat_completions(payload).await?;

    Ok(ImageAnalysis {
        content: completion.first_content(),
    })
}
