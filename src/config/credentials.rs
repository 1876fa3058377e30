use std::env;
use std::sync::OnceLock;

use crate::errors::ApiError;

/// Resolves the provider API key from the environment once and caches it for
/// the lifetime of the owning state. Concurrent first calls may each read the
/// environment, but only one value is ever cached and observed afterwards.
#[derive(Debug)]
pub struct CredentialResolver {
    var: &'static str,
    cached: OnceLock<String>,
}

impl CredentialResolver {
    pub fn new(var: &'static str) -> Self {
        Self {
            var,
            cached: OnceLock::new(),
        }
    }

    pub fn resolve(&self) -> Result<&str, ApiError> {
        if let Some(key) = self.cached.get() {
            return Ok(key);
        }

        let key = env::var(self.var).map_err(|_| {
            ApiError::Configuration(format!("{} environment variable is not set", self.var))
        })?;
        Ok(self.cached.get_or_init(|| key))
    }
}
