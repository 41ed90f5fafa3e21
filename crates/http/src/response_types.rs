//! Response types (Serialize)

use ipl_stats_core::{ModelChoice, Provider};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ModelInfo {
    pub id: ModelChoice,
    pub provider: Provider,
    pub available: bool,
}

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub default: ModelChoice,
    pub models: Vec<ModelInfo>,
}

#[derive(Debug, Serialize)]
pub struct SchemaResponse {
    pub table_info: String,
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}
