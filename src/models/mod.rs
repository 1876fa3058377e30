pub mod chat;
pub mod content;
pub mod image;
pub mod metrics;
pub mod transcription;
pub mod usage;
