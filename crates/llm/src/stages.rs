use ipl_stats_core::strip_code_fence;

use crate::ai_types::{Message, QueryJson};
use crate::chat::{ChatModel, ReplyFormat};
use crate::client::truncate;
use crate::error::LlmError;
use crate::prompts::{
    SqlPromptContext, answer_prompt, expansion_prompt, sql_system_prompt, sql_user_prompt,
};

/// Restate the user's question as explicit, schema-aware bullet points.
///
/// # Errors
/// Propagates the provider error unchanged.
pub async fn expand_question(
    llm: &dyn ChatModel,
    table_info: &str,
    question: &str,
) -> Result<String, LlmError> {
    let prompt = expansion_prompt(table_info, question);
    let content = llm.complete(vec![Message::user(prompt)], ReplyFormat::Text).await?;
    Ok(content.trim().to_owned())
}

/// Ask the model for a single SQL statement answering `expanded_question`.
///
/// # Errors
/// Propagates the provider error, or fails if no SQL can be extracted.
pub async fn generate_sql(
    llm: &dyn ChatModel,
    ctx: &SqlPromptContext<'_>,
    expanded_question: &str,
) -> Result<String, LlmError> {
    let messages =
        vec![Message::system(sql_system_prompt(ctx)), Message::user(sql_user_prompt(expanded_question))];
    let content = llm.complete(messages, ReplyFormat::JsonObject).await?;
    extract_sql(&content)
}

/// Explain the result of `sql` in markdown.
///
/// # Errors
/// Propagates the provider error unchanged.
pub async fn compose_answer(
    llm: &dyn ChatModel,
    question: &str,
    sql: &str,
    result: &str,
) -> Result<String, LlmError> {
    let prompt = answer_prompt(question, sql, result);
    let content = llm.complete(vec![Message::user(prompt)], ReplyFormat::Text).await?;
    Ok(content.trim().to_owned())
}

/// Pull the SQL statement out of a model reply.
///
/// Accepts the requested `{"query": ...}` object (optionally fenced) and, for
/// models that ignore JSON mode, a fenced or bare SQL statement.
///
/// # Errors
/// Returns `JsonParse` for a malformed JSON object and `MissingField` when the
/// reply carries no SQL.
pub fn extract_sql(content: &str) -> Result<String, LlmError> {
    let body = strip_code_fence(content);
    let sql = if body.starts_with('{') {
        let parsed: QueryJson = serde_json::from_str(body).map_err(|e| LlmError::JsonParse {
            context: format!("structured SQL output (content: {})", truncate(body, 300)),
            source: e,
        })?;
        strip_code_fence(&parsed.query).to_owned()
    } else {
        body.to_owned()
    };

    if sql.is_empty() {
        return Err(LlmError::MissingField("query".to_owned()));
    }
    Ok(sql)
}
