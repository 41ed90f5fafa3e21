use async_trait::async_trait;

use crate::ai_types::Message;
use crate::error::LlmError;

/// Shape of the reply requested from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyFormat {
    Text,
    JsonObject,
}

/// Text-completion seam between the pipeline and a hosted model.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Model identifier this instance talks to.
    fn model(&self) -> &str;

    /// Send `messages` and return the raw content of the first choice.
    async fn complete(&self, messages: Vec<Message>, format: ReplyFormat)
    -> Result<String, LlmError>;
}
