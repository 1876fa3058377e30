use serde::{Deserialize, Serialize};

use crate::config::constants::DEFAULT_TEMPERATURE;
use crate::models::chat::ChatCompletionRequest;
use crate::models::content::{ChatCompletionMessage, ChatMessageContent};
use crate::models::usage::Usage;

/// Chat completion payload in Groq's wire format.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct GroqChatRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct GroqChatCompletion {
    pub model: String,
    #[serde(default)]
    pub choices: Vec<GroqChatChoice>,
    #[serde(default)]
    pub usage: Usage,
}

#[derive(Deserialize, Clone, Debug)]
pub struct GroqChatChoice {
    pub message: GroqChatMessage,
}

#[derive(Deserialize, Clone, Debug)]
pub struct GroqChatMessage {
    pub content: Option<ChatMessageContent>,
}

impl GroqChatCompletion {
    /// Text of the first choice, or empty when the provider returned none.
    pub fn first_content(&self) -> String {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_ref())
            .map(ChatMessageContent::as_text)
            .unwrap_or_default()
    }
}

impl From<ChatCompletionRequest> for GroqChatRequest {
    fn from(request: ChatCompletionRequest) -> Self {
        GroqChatRequest {
            model: request.model,
            messages: request.messages,
            temperature: request.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            max_tokens: request.max_tokens,
        }
    }
}
