//! Typed error enum for the LLM crate.

use ipl_stats_core::Provider;
use thiserror::Error;

/// Errors from LLM API operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("empty response: no choices returned")]
    EmptyResponse,
    #[error("missing field in response: {0}")]
    MissingField(String),
    #[error("client initialization failed: {0}")]
    ClientInit(String),
    #[error("{provider} is not configured: set {var}")]
    MissingApiKey { provider: Provider, var: &'static str },
}

impl LlmError {
    /// Whether this error came from the provider rejecting or failing the call
    /// (as opposed to local configuration).
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        !matches!(self, Self::MissingApiKey { .. } | Self::ClientInit(_))
    }
}
