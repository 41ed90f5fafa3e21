use std::sync::Arc;
use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use ipl_stats_core::QuerySession;

use crate::AppState;
use crate::api_error::ApiError;
use crate::request_types::AskRequest;

pub async fn ask(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<QuerySession>, ApiError> {
    let Json(req) = payload?;
    let started = Instant::now();
    match state.ask_service.ask(&req.question, req.model.as_deref()).await {
        Ok(session) => {
            tracing::info!(
                model = %session.model,
                rows = session.result.row_count(),
                elapsed_ms = started.elapsed().as_millis(),
                "ask completed"
            );
            Ok(Json(session))
        },
        Err(e) => {
            tracing::warn!(
                stage = e.stage().map(|s| s.as_str()),
                error = %e,
                "ask failed"
            );
            Err(e.into())
        },
    }
}
