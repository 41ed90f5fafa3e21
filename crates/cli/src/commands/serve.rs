use std::sync::Arc;

use anyhow::Result;
use ipl_stats_core::AppConfig;
use ipl_stats_http::{AppState, create_router};

use crate::build_service;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let config = AppConfig::from_env()?;
    let ask_service = Arc::new(build_service(&config).await?);
    let state = Arc::new(AppState { ask_service });

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
