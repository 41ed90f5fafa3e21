use std::sync::Arc;
use std::time::Instant;

use ipl_stats_core::{MAX_RESULT_BYTES_IN_PROMPT, ModelChoice, QuerySession};
use ipl_stats_llm::prompts::SqlPromptContext;
use ipl_stats_llm::{ChatModel, compose_answer, expand_question, generate_sql, truncate};
use ipl_stats_storage::SqlExecutor;

use crate::error::{PipelineStage, ServiceError};

/// Expand → generate SQL → execute → answer, once per question.
///
/// Holds only immutable context (executor, schema text, row cap); every call
/// to [`QueryPipeline::run`] builds and returns its own [`QuerySession`].
pub struct QueryPipeline {
    executor: Arc<dyn SqlExecutor>,
    table_info: Arc<str>,
    top_k: usize,
}

impl QueryPipeline {
    #[must_use]
    pub fn new(executor: Arc<dyn SqlExecutor>, table_info: impl Into<Arc<str>>, top_k: usize) -> Self {
        Self { executor, table_info: table_info.into(), top_k }
    }

    #[must_use]
    pub fn table_info(&self) -> &str {
        &self.table_info
    }

    /// Run the four stages in order. The first failure stops the pipeline.
    pub async fn run(
        &self,
        llm: &dyn ChatModel,
        model: ModelChoice,
        question: &str,
    ) -> Result<QuerySession, ServiceError> {
        let started = Instant::now();

        let expanded_question = expand_question(llm, &self.table_info, question)
            .await
            .map_err(ServiceError::llm(PipelineStage::Expand))?;
        tracing::info!(stage = %PipelineStage::Expand, model = %model, "question expanded");

        let ctx = SqlPromptContext {
            dialect: self.executor.dialect(),
            top_k: self.top_k,
            table_info: &self.table_info,
        };
        let sql = generate_sql(llm, &ctx, &expanded_question)
            .await
            .map_err(ServiceError::llm(PipelineStage::GenerateSql))?;
        tracing::info!(stage = %PipelineStage::GenerateSql, %sql, "sql generated");

        let result = self.executor.execute(&sql).await.inspect_err(|e| {
            tracing::warn!(stage = %PipelineStage::Execute, error = %e, %sql, "query failed");
        })?;

        let rendered = result.render_table();
        let answer = compose_answer(
            llm,
            question,
            &sql,
            truncate(&rendered, MAX_RESULT_BYTES_IN_PROMPT),
        )
        .await
        .map_err(ServiceError::llm(PipelineStage::Answer))?;

        tracing::info!(
            model = %model,
            rows = result.row_count(),
            elapsed_ms = started.elapsed().as_millis(),
            "question answered"
        );

        Ok(QuerySession {
            model,
            question: question.to_owned(),
            expanded_question,
            sql,
            result,
            answer,
        })
    }
}
