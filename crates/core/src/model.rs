//! Supported language models and the providers that serve them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// Hosted LLM provider reachable through an OpenAI-compatible endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// Google Gemini
    GoogleGenai,
    /// Groq
    Groq,
}

impl Provider {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::GoogleGenai => "google_genai",
            Self::Groq => "groq",
        }
    }

    /// Environment variable holding this provider's API key.
    #[must_use]
    pub const fn api_key_var(&self) -> &'static str {
        match *self {
            Self::GoogleGenai => "GOOGLE_API_KEY",
            Self::Groq => "GROQ_API_KEY",
        }
    }

    /// Environment variable overriding this provider's base URL.
    #[must_use]
    pub const fn base_url_var(&self) -> &'static str {
        match *self {
            Self::GoogleGenai => "GEMINI_API_URL",
            Self::Groq => "GROQ_API_URL",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the fixed set of models a user may pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelChoice {
    #[default]
    Gemini20Flash,
    Llama33Versatile,
    Gemini25FlashPreview,
}

impl ModelChoice {
    /// Dropdown order.
    pub const ALL: &'static [ModelChoice] =
        &[Self::Gemini20Flash, Self::Llama33Versatile, Self::Gemini25FlashPreview];

    /// Model identifier sent to the provider.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Gemini20Flash => "gemini-2.0-flash",
            Self::Llama33Versatile => "llama-3.3-70b-versatile",
            Self::Gemini25FlashPreview => "gemini-2.5-flash-preview-04-17",
        }
    }

    #[must_use]
    pub const fn provider(&self) -> Provider {
        match *self {
            Self::Gemini20Flash | Self::Gemini25FlashPreview => Provider::GoogleGenai,
            Self::Llama33Versatile => Provider::Groq,
        }
    }

    /// Parse an optional identifier, falling back to the default model when
    /// absent or blank.
    pub fn parse_or_default(id: Option<&str>) -> Result<Self, CoreError> {
        match id.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(s) => s.parse(),
        }
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelChoice {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| CoreError::UnsupportedModel(s.to_owned()))
    }
}

impl Serialize for ModelChoice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModelChoice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
