//! Stub LLM and database used by the service tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use ipl_stats_core::ResultSet;
use ipl_stats_llm::{ChatModel, LlmError, Message, ReplyFormat};
use ipl_stats_storage::{SqlExecutor, StorageError};

/// Replays scripted replies in order and records every request.
pub(crate) struct ScriptedChat {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    calls: Mutex<Vec<(Vec<Message>, ReplyFormat)>>,
}

impl ScriptedChat {
    pub(crate) fn new(replies: Vec<Result<String, LlmError>>) -> Self {
        Self { replies: Mutex::new(replies.into()), calls: Mutex::new(Vec::new()) }
    }

    pub(crate) fn replying(replies: &[&str]) -> Self {
        Self::new(replies.iter().map(|r| Ok((*r).to_owned())).collect())
    }

    pub(crate) fn calls(&self) -> Vec<(Vec<Message>, ReplyFormat)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for ScriptedChat {
    fn model(&self) -> &str {
        "scripted"
    }

    async fn complete(
        &self,
        messages: Vec<Message>,
        format: ReplyFormat,
    ) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push((messages, format));
        self.replies.lock().unwrap().pop_front().unwrap_or(Err(LlmError::EmptyResponse))
    }
}

/// Returns a fixed result (or database error) and records the SQL it received.
pub(crate) struct StubExecutor {
    outcome: Result<ResultSet, String>,
    seen: Mutex<Vec<String>>,
}

impl StubExecutor {
    pub(crate) fn returning(result: ResultSet) -> Self {
        Self { outcome: Ok(result), seen: Mutex::new(Vec::new()) }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self { outcome: Err(message.to_owned()), seen: Mutex::new(Vec::new()) }
    }

    pub(crate) fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl SqlExecutor for StubExecutor {
    fn dialect(&self) -> &'static str {
        "postgresql"
    }

    async fn execute(&self, sql: &str) -> Result<ResultSet, StorageError> {
        self.seen.lock().unwrap().push(sql.to_owned());
        self.outcome
            .clone()
            .map_err(|msg| StorageError::Database(sqlx::Error::Protocol(msg)))
    }
}
