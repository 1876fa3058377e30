use serde::{Deserialize, Serialize};

pub use super::content::ChatCompletionMessage;
use super::usage::Usage;

/// Unified chat request as posted by the console. Missing `messages` or
/// `model` deserialize to empty and are rejected by shape validation.
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ChatCompletionRequest {
    #[serde(default)]
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(default)]
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ChatCompletionResult {
    pub content: String,
    pub model: String,
    pub usage: Usage,
}
