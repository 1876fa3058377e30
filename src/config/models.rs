use super::constants::{DEFAULT_GROQ_BASE_URL, DEFAULT_PORT, DEFAULT_UPSTREAM_TIMEOUT_SECS};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub groq: GroqConfig,
}

#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            groq: GroqConfig::default(),
        }
    }
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GROQ_BASE_URL.to_string(),
            timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}
