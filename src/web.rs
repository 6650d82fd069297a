use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use axum::{Router, http::StatusCode};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

use crate::{HealthAssistant, api, config::ServerConfig};

/// The full application: the JSON API under `/api` with CORS, body size and timeout layers
pub fn app(assistant: HealthAssistant, config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api::router(Arc::new(Mutex::new(assistant))))
        .layer(RequestBodyLimitLayer::new(config.max_body_kb as usize * 1024))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(u64::from(config.request_timeout_seconds)),
        ))
        .layer(cors)
}

pub async fn run(assistant: HealthAssistant, config: &ServerConfig) -> Result<()> {
    let app = app(assistant, config);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", config.port);
    axum::serve(listener, app).await.context("Web server failed")?;
    Ok(())
}
