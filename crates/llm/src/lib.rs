//! LLM integration for the IPL question pipeline.
//!
//! Provider clients speak the OpenAI-compatible chat completions API; the
//! prompt stages are written against the [`ChatModel`] trait so they can be
//! driven by any implementation.

mod ai_types;
mod chat;
mod client;
mod error;
pub mod prompts;
mod router;
mod stages;

#[cfg(test)]
mod client_tests;

pub use ai_types::Message;
pub use chat::{ChatModel, ReplyFormat};
pub use client::{LlmClient, truncate};
pub use error::LlmError;
pub use router::ProviderRouter;
pub use stages::{compose_answer, expand_question, extract_sql, generate_sql};
