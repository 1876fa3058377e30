pub(crate) mod models;
mod provider;

pub use models::{GroqChatCompletion, GroqChatRequest};
pub use provider::GroqProvider;
