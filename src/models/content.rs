use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ChatCompletionMessage {
    pub role: ChatRole,
    pub content: ChatMessageContent,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(untagged)]
pub enum ChatMessageContent {
    String(String),
    Array(Vec<ChatMessageContentPart>),
}

impl ChatMessageContent {
    /// Plain text of the message; multimodal arrays flatten to their text
    /// parts.
    pub fn as_text(&self) -> String {
        match self {
            ChatMessageContent::String(text) => text.clone(),
            ChatMessageContent::Array(parts) => parts
                .iter()
                .filter_map(|part| match part {
                    ChatMessageContentPart::Text { text } => Some(text.as_str()),
                    ChatMessageContentPart::ImageUrl { .. } => None,
                })
                .collect(),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatMessageContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrlPart },
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ImageUrlPart {
    pub url: String,
}
