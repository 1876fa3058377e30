use std::time::Duration;

use reqwest::Client;
use reqwest::multipart::{Form, Part};

use super::models::{GroqChatCompletion, GroqChatRequest};
use crate::config::constants::TRANSCRIPTION_MODEL;
use crate::config::models::GroqConfig;
use crate::errors::ApiError;
use crate::models::metrics::PerformanceMetricSample;
use crate::models::transcription::Transcription;

/// HTTP client for the Groq API. One instance serves the whole process; the
/// credential it holds is immutable.
pub struct GroqProvider {
    api_key: String,
    base_url: String,
    http_client: Client,
}

impl GroqProvider {
    pub fn new(api_key: &str, config: &GroqConfig) -> Result<Self, ApiError> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_key: api_key.to_string(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub async fn chat_completions(
        &self,
        payload: GroqChatRequest,
    ) -> Result<GroqChatCompletion, ApiError> {
        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| ApiError::upstream(format!("chat completion request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.text().await {
                Ok(body) if !body.is_empty() => body,
                _ => format!("Groq API returned {status}"),
            };
            return Err(ApiError::Upstream {
                status: Some(status),
                message,
            });
        }

        response.json().await.map_err(|e| {
            ApiError::upstream(format!("failed to decode chat completion response: {e}"))
        })
    }

    pub async fn transcribe(
        &self,
        audio: Vec<u8>,
        filename: Option<String>,
    ) -> Result<Transcription, ApiError> {
        let file = Part::bytes(audio).file_name(filename.unwrap_or_else(|| "audio.webm".to_string()));
        let form = Form::new()
            .part("file", file)
            .text("model", TRANSCRIPTION_MODEL);

        let response = self
            .http_client
            .post(format!("{}/audio/transcriptions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::upstream(format!("transcription request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Upstream {
                status: Some(status),
                message: format!(
                    "Transcription failed: {}",
                    status.canonical_reason().unwrap_or("unknown status")
                ),
            });
        }

        response.json().await.map_err(|e| {
            ApiError::upstream(format!("failed to decode transcription response: {e}"))
        })
    }

    pub async fn performance_metrics(&self) -> Result<Vec<PerformanceMetricSample>, ApiError> {
        let response = self
            .http_client
            .get(format!("{}/metrics", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(|e| ApiError::upstream(format!("metrics request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Upstream {
                status: Some(status),
                message: format!(
                    "Failed to fetch metrics: {}",
                    status.canonical_reason().unwrap_or("unknown status")
                ),
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::upstream(format!("failed to decode metrics response: {e}")))
    }
}
