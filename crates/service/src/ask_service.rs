use ipl_stats_core::{MAX_QUESTION_LEN, ModelChoice, QuerySession};
use ipl_stats_llm::ProviderRouter;

use crate::error::ServiceError;
use crate::pipeline::QueryPipeline;

/// Message shown when the question box is submitted empty.
pub const EMPTY_QUESTION_MESSAGE: &str = "Please enter a question.";

/// Entry point used by the HTTP and CLI front ends.
pub struct AskService {
    pipeline: QueryPipeline,
    router: ProviderRouter,
}

impl AskService {
    #[must_use]
    pub const fn new(pipeline: QueryPipeline, router: ProviderRouter) -> Self {
        Self { pipeline, router }
    }

    /// Answer `question` with `model` (or the default model when `None`).
    pub async fn ask(
        &self,
        question: &str,
        model: Option<&str>,
    ) -> Result<QuerySession, ServiceError> {
        let question = validate_question(question)?;
        let model = ModelChoice::parse_or_default(model)?;
        let llm = self
            .router
            .client_for(model)
            .map_err(|e| ServiceError::NotConfigured(e.to_string()))?;
        self.pipeline.run(&llm, model, question).await
    }

    /// Every supported model with whether its provider is configured.
    #[must_use]
    pub fn models(&self) -> Vec<(ModelChoice, bool)> {
        ModelChoice::ALL.iter().map(|m| (*m, self.router.is_available(*m))).collect()
    }

    #[must_use]
    pub fn table_info(&self) -> &str {
        self.pipeline.table_info()
    }
}

fn validate_question(question: &str) -> Result<&str, ServiceError> {
    let trimmed = question.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::InvalidInput(EMPTY_QUESTION_MESSAGE.to_owned()));
    }
    if trimmed.len() > MAX_QUESTION_LEN {
        return Err(ServiceError::InvalidInput(format!(
            "Question is too long ({} bytes, max {MAX_QUESTION_LEN}).",
            trimmed.len()
        )));
    }
    Ok(trimmed)
}
