//! Maps a [`ModelChoice`] onto the provider endpoint that serves it.

use ipl_stats_core::{AppConfig, ModelChoice, Provider, ProviderConfig};

use crate::client::{LlmClient, build_http_client};
use crate::error::LlmError;

/// Builds provider clients for the fixed model list.
///
/// One HTTP connection pool is shared by every client handed out.
#[derive(Debug, Clone)]
pub struct ProviderRouter {
    http: reqwest::Client,
    google: ProviderConfig,
    groq: ProviderConfig,
}

impl ProviderRouter {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(google: ProviderConfig, groq: ProviderConfig) -> Result<Self, LlmError> {
        Ok(Self { http: build_http_client()?, google, groq })
    }

    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, LlmError> {
        Self::new(config.google.clone(), config.groq.clone())
    }

    /// Whether the provider behind `model` has an API key.
    #[must_use]
    pub fn is_available(&self, model: ModelChoice) -> bool {
        self.endpoint(model.provider()).api_key.is_some()
    }

    /// Client for `model`, pointed at its provider.
    ///
    /// # Errors
    /// Returns `LlmError::MissingApiKey` when the provider has no key configured.
    pub fn client_for(&self, model: ModelChoice) -> Result<LlmClient, LlmError> {
        let provider = model.provider();
        let endpoint = self.endpoint(provider);
        let api_key = endpoint
            .api_key
            .clone()
            .ok_or(LlmError::MissingApiKey { provider, var: provider.api_key_var() })?;

        tracing::debug!(model = %model, provider = %provider, "routing to provider");
        Ok(LlmClient::with_http_client(
            self.http.clone(),
            api_key,
            endpoint.base_url.clone(),
            model.as_str().to_owned(),
        ))
    }

    const fn endpoint(&self, provider: Provider) -> &ProviderConfig {
        match provider {
            Provider::GoogleGenai => &self.google,
            Provider::Groq => &self.groq,
        }
    }
}
