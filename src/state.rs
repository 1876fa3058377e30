use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::config::constants::GROQ_API_KEY_VAR;
use crate::config::credentials::CredentialResolver;
use crate::config::models::Config;
use crate::errors::ApiError;
use crate::providers::groq::GroqProvider;

pub struct AppState {
    pub config: Arc<Config>,
    credentials: CredentialResolver,
    groq: OnceCell<GroqProvider>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            credentials: CredentialResolver::new(GROQ_API_KEY_VAR),
            groq: OnceCell::new(),
        }
    }

    /// Provider client accessor. The first caller resolves the credential and
    /// constructs the client; every later caller observes the same instance.
    /// A missing credential is reported on every call until the environment
    /// is fixed; nothing half-initialized is ever cached.
    pub async fn groq(&self) -> Result<&GroqProvider, ApiError> {
        self.groq
            .get_or_try_init(|| async {
                let api_key = self.credentials.resolve()?;
                GroqProvider::new(api_key, &self.config.groq)
            })
            .await
    }
}
