//! Request types (Deserialize)

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
    pub model: Option<String>,
}
