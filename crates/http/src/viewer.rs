//! Web form - embedded HTML/CSS/JS for asking questions
//!
//! Serves a single page at `/` with a question box, a model dropdown and
//! panels for the answer, expanded question, SQL and raw rows.

use axum::{
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

/// Embedded HTML for the question form
pub const VIEWER_HTML: &str = include_str!("viewer.html");

/// Serve the form HTML page
pub async fn serve_viewer() -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(VIEWER_HTML))
        .into_response()
}
