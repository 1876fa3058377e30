use chrono::{Duration, Utc};
use tracing::warn;

use crate::errors::ApiError;
use crate::models::metrics::PerformanceMetricSample;
use crate::state::AppState;

// latencyMs, tokensPerSecond, totalTokens, promptTokens, completionTokens,
// one row per hour, most recent first.
const FALLBACK_METRICS: [(f64, f64, u32, u32, u32); 5] = [
    (150.0, 120.0, 1200, 400, 800),
    (140.0, 125.0, 1300, 450, 850),
    (160.0, 115.0, 1100, 350, 750),
    (145.0, 130.0, 1400, 500, 900),
    (155.0, 118.0, 1250, 425, 825),
];

/// Recent performance samples. Unlike the other capabilities, any failure
/// here degrades to a fixed demo window; an error never reaches the caller.
pub async fn fetch_recent(state: &AppState) -> Vec<PerformanceMetricSample> {
    match try_fetch(state).await {
        Ok(samples) => samples,
        Err(e) => {
            warn!("falling back to sample metrics: {e}");
            fallback_samples()
        }
    }
}

async fn try_fetch(state: &AppState) -> Result<Vec<PerformanceMetricSample>, ApiError> {
    let groq = state.groq().await?;
    groq.performance_metrics().await
}

fn fallback_samples() -> Vec<PerformanceMetricSample> {
    let now = Utc::now();
    FALLBACK_METRICS
        .iter()
        .enumerate()
        .map(|(hours_ago, &(latency_ms, tokens_per_second, total, prompt, completion))| {
            PerformanceMetricSample {
                latency_ms,
                tokens_per_second,
                total_tokens: total,
                prompt_tokens: prompt,
                completion_tokens: completion,
                timestamp: now - Duration::hours(hours_ago as i64),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_spans_the_last_four_hours() {
        let samples = fallback_samples();
        assert_eq!(samples.len(), 5);

        for pair in samples.windows(2) {
            assert_eq!(pair[0].timestamp - pair[1].timestamp, Duration::hours(1));
        }
    }

    #[test]
    fn fallback_values_are_the_fixed_demo_series() {
        let samples = fallback_samples();
        assert_eq!(samples[0].latency_ms, 150.0);
        assert_eq!(samples[0].tokens_per_second, 120.0);
        assert_eq!(samples[0].total_tokens, 1200);
        assert_eq!(samples[4].latency_ms, 155.0);
        assert_eq!(samples[4].completion_tokens, 825);
    }
}
