use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One point of the provider's recent-performance series. Field names follow
/// the console's wire format.
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetricSample {
    pub latency_ms: f64,
    pub tokens_per_second: f64,
    pub total_tokens: u32,
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub timestamp: DateTime<Utc>,
}
