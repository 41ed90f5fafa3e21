//! Typed error enum for core domain parsing and configuration.

use thiserror::Error;

/// Errors raised while parsing domain values or loading configuration.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Unsupported model: {0}")]
    UnsupportedModel(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("missing configuration: {0} environment variable must be set")]
    MissingConfig(&'static str),
}
