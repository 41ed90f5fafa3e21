//! Typed error enum for the service layer.
//!
//! Unifies configuration, LLM and database failures and records which
//! pipeline stage produced them, so front ends can show the user where the
//! question went wrong.

use std::fmt;

use ipl_stats_core::CoreError;
use ipl_stats_llm::LlmError;
use ipl_stats_storage::StorageError;
use thiserror::Error;

/// The four pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Expand,
    GenerateSql,
    Execute,
    Answer,
}

impl PipelineStage {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Expand => "expand",
            Self::GenerateSql => "generate_sql",
            Self::Execute => "execute",
            Self::Answer => "answer",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller provided an empty or oversized question.
    #[error("{0}")]
    InvalidInput(String),

    /// Unknown model identifier.
    #[error(transparent)]
    Model(#[from] CoreError),

    /// The provider behind the chosen model has no credentials.
    #[error("not configured: {0}")]
    NotConfigured(String),

    /// A language-model stage failed.
    #[error("{stage} stage failed: {source}")]
    Llm {
        stage: PipelineStage,
        #[source]
        source: LlmError,
    },

    /// The generated SQL could not be run.
    #[error("execute stage failed: {0}")]
    Storage(#[from] StorageError),
}

impl ServiceError {
    pub(crate) fn llm(stage: PipelineStage) -> impl Fn(LlmError) -> Self {
        move |source| Self::Llm { stage, source }
    }

    /// Stage that failed, if the pipeline had started.
    #[must_use]
    pub const fn stage(&self) -> Option<PipelineStage> {
        match self {
            Self::Llm { stage, .. } => Some(*stage),
            Self::Storage(_) => Some(PipelineStage::Execute),
            Self::InvalidInput(_) | Self::Model(_) | Self::NotConfigured(_) => None,
        }
    }

    /// Whether the failure came from an external provider or the database.
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        match self {
            Self::Llm { source, .. } => source.is_upstream(),
            Self::Storage(_) => true,
            Self::InvalidInput(_) | Self::Model(_) | Self::NotConfigured(_) => false,
        }
    }
}
