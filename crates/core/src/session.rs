//! Per-submission pipeline state.

use serde::Serialize;

use crate::model::ModelChoice;
use crate::result_set::ResultSet;

/// Everything produced while answering one question. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuerySession {
    pub model: ModelChoice,
    pub question: String,
    pub expanded_question: String,
    pub sql: String,
    pub result: ResultSet,
    pub answer: String,
}
