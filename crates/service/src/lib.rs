//! Service layer for ipl-stats
//!
//! Runs the four-stage question pipeline between the HTTP/CLI front ends and
//! the LLM and database crates.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod ask_service;
mod error;
mod pipeline;

#[cfg(test)]
mod ask_service_tests;
#[cfg(test)]
mod test_support;

pub use ask_service::{AskService, EMPTY_QUESTION_MESSAGE};
pub use error::{PipelineStage, ServiceError};
pub use pipeline::QueryPipeline;
