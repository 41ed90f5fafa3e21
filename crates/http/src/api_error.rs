//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a JSON body and status
//! code. Provider and database failures are shown to the user verbatim.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ipl_stats_service::{PipelineStage, ServiceError};

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`, plus `"stage"` when a
/// pipeline stage failed.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: empty question, unknown model.
    BadRequest(String),
    /// 502 Bad Gateway: a language model or the database rejected the call.
    Upstream { stage: Option<PipelineStage>, message: String },
    /// 503 Service Unavailable: provider credentials missing.
    ServiceUnavailable(String),
    /// 500 Internal Server Error: unexpected failure. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, stage) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            Self::Upstream { stage, message } => (StatusCode::BAD_GATEWAY, message, stage),
            Self::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg, None),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned(), None)
            },
        };
        let body = match stage {
            Some(stage) => serde_json::json!({"error": message, "stage": stage.as_str()}),
            None => serde_json::json!({"error": message}),
        };
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            ServiceError::Model(e) => Self::BadRequest(e.to_string()),
            ServiceError::NotConfigured(msg) => Self::ServiceUnavailable(msg),
            ref e if e.is_upstream() => {
                Self::Upstream { stage: e.stage(), message: e.to_string() }
            },
            other => Self::Internal(other.into()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
