//! Environment configuration, read once at process start.

use std::fmt;

use crate::constants::{DEFAULT_GEMINI_API_URL, DEFAULT_GROQ_API_URL, DEFAULT_TOP_K};
use crate::error::CoreError;
use crate::model::Provider;

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + fmt::Display>(var: &str, default: T) -> T {
    parse_with_default(var, std::env::var(var).ok(), default)
}

fn parse_with_default<T: std::str::FromStr + fmt::Display>(
    var: &str,
    raw: Option<String>,
    default: T,
) -> T {
    match raw {
        Some(v) => match v.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        None => default,
    }
}

/// Credentials and endpoints for one provider.
#[derive(Clone)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Process configuration collected from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub google: ProviderConfig,
    pub groq: ProviderConfig,
    pub top_k: usize,
}

impl AppConfig {
    /// Reads `DATABASE_URL`, provider keys and optional overrides.
    ///
    /// # Errors
    /// Returns `CoreError::MissingConfig` if `DATABASE_URL` is unset or blank.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let database_url = non_blank("DATABASE_URL").ok_or(CoreError::MissingConfig("DATABASE_URL"))?;

        let provider = |p: Provider, default_url: &str| ProviderConfig {
            api_key: non_blank(p.api_key_var()),
            base_url: non_blank(p.base_url_var()).unwrap_or_else(|| default_url.to_owned()),
        };

        let google = provider(Provider::GoogleGenai, DEFAULT_GEMINI_API_URL);
        let groq = provider(Provider::Groq, DEFAULT_GROQ_API_URL);
        if google.api_key.is_none() && groq.api_key.is_none() {
            tracing::warn!("neither GOOGLE_API_KEY nor GROQ_API_KEY is set; every question will fail");
        }

        let top_k = parse_with_default("IPL_STATS_TOP_K", lookup("IPL_STATS_TOP_K"), DEFAULT_TOP_K);

        Ok(Self { database_url, google, groq, top_k })
    }

    #[must_use]
    pub const fn provider(&self, provider: Provider) -> &ProviderConfig {
        match provider {
            Provider::GoogleGenai => &self.google,
            Provider::Groq => &self.groq,
        }
    }
}
