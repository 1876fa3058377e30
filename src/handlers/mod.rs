pub mod chat;
pub mod image;
pub mod metrics;
pub mod transcription;
