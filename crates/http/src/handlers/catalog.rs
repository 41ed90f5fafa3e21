use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use ipl_stats_core::ModelChoice;

use crate::AppState;
use crate::response_types::{ModelInfo, ModelsResponse, SchemaResponse};

pub async fn list_models(State(state): State<Arc<AppState>>) -> Json<ModelsResponse> {
    let models = state
        .ask_service
        .models()
        .into_iter()
        .map(|(id, available)| ModelInfo { id, provider: id.provider(), available })
        .collect();
    Json(ModelsResponse { default: ModelChoice::default(), models })
}

pub async fn schema(State(state): State<Arc<AppState>>) -> Json<SchemaResponse> {
    Json(SchemaResponse { table_info: state.ask_service.table_info().to_owned() })
}
