use std::env;

use super::models::Config;
use crate::errors::ApiError;

/// Builds the process configuration from the environment. The provider API
/// key is deliberately not read here; it is resolved on first capability use.
pub fn load_config() -> Result<Config, ApiError> {
    let mut config = Config::default();

    if let Ok(port) = env::var("PORT") {
        config.port = port.parse().map_err(|_| {
            ApiError::Configuration(format!("PORT is not a valid port number: {port}"))
        })?;
    }

    if let Ok(base_url) = env::var("GROQ_BASE_URL") {
        config.groq.base_url = base_url;
    }

    if let Ok(timeout) = env::var("GROQ_TIMEOUT_SECS") {
        config.groq.timeout_secs = timeout.parse().map_err(|_| {
            ApiError::Configuration(format!(
                "GROQ_TIMEOUT_SECS is not a valid duration: {timeout}"
            ))
        })?;
    }

    Ok(config)
}
