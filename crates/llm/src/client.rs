use std::time::{Duration, Instant};

use async_trait::async_trait;
use ipl_stats_core::LLM_REQUEST_TIMEOUT_SECS;

use crate::ai_types::{ChatRequest, ChatResponse, Message, ResponseFormat};
use crate::chat::{ChatModel, ReplyFormat};
use crate::error::LlmError;

/// Client for an OpenAI-compatible chat completions endpoint.
pub struct LlmClient {
    pub(crate) client: reqwest::Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) model: String,
}

impl std::fmt::Debug for LlmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmClient")
            .field("client", &self.client)
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl LlmClient {
    /// Creates a new LLM client with its own HTTP client.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(api_key: String, base_url: String, model: String) -> Result<Self, LlmError> {
        Ok(Self::with_http_client(build_http_client()?, api_key, base_url, model))
    }

    /// Creates a client that shares an existing HTTP connection pool.
    #[must_use]
    pub fn with_http_client(
        client: reqwest::Client,
        api_key: String,
        base_url: String,
        model: String,
    ) -> Self {
        let base_url = base_url.trim_end_matches('/').to_owned();
        Self { client, api_key, base_url, model }
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a chat completion request and return the extracted content string.
    ///
    /// One attempt only: transport failures and non-success statuses are
    /// returned to the caller as-is.
    ///
    /// # Errors
    /// Returns an error if the HTTP request fails, the API returns a
    /// non-success status, the response body cannot be parsed, or the choices
    /// array is empty.
    pub(crate) async fn chat_completion(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let started = Instant::now();
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body =
                response.text().await.unwrap_or_else(|_| "Could not read error body".to_owned());
            tracing::warn!(model = %self.model, status = status.as_u16(), "chat completion rejected");
            return Err(LlmError::HttpStatus { code: status.as_u16(), body });
        }

        let body = response.text().await?;
        let chat_response: ChatResponse =
            serde_json::from_str(&body).map_err(|e| LlmError::JsonParse {
                context: format!("chat completion response (body: {})", truncate(&body, 200)),
                source: e,
            })?;

        let first_choice = chat_response.choices.into_iter().next().ok_or(LlmError::EmptyResponse)?;
        let content = first_choice
            .message
            .content
            .ok_or_else(|| LlmError::MissingField("choices[0].message.content".to_owned()))?;

        tracing::debug!(
            model = %self.model,
            elapsed_ms = started.elapsed().as_millis(),
            chars = content.len(),
            "chat completion finished"
        );
        Ok(content)
    }
}

#[async_trait]
impl ChatModel for LlmClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(
        &self,
        messages: Vec<Message>,
        format: ReplyFormat,
    ) -> Result<String, LlmError> {
        let response_format = match format {
            ReplyFormat::Text => None,
            ReplyFormat::JsonObject => {
                Some(ResponseFormat { format_type: "json_object".to_owned() })
            },
        };
        let request =
            ChatRequest { model: self.model.clone(), messages, response_format, temperature: 0.0 };
        self.chat_completion(&request).await
    }
}

pub(crate) fn build_http_client() -> Result<reqwest::Client, LlmError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(LLM_REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| LlmError::ClientInit(e.to_string()))
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
