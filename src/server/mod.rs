//! HTTP server: routing, shared state and startup.

pub mod handlers;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::infra::config::{ApiKey, ServerConfig};
use crate::llm::GeminiClient;

/// Shared per-request state. Cloned into each handler; holds nothing
/// mutable.
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub gemini: GeminiClient,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/summarize", post(handlers::summarize_local))
        .route("/summarize-gemini", post(handlers::summarize_gemini))
        .route(
            "/summarize-gemini-bullets",
            post(handlers::summarize_gemini_bullets),
        )
        .route(
            "/summarize-gemini-takeaways",
            post(handlers::summarize_gemini_takeaways),
        )
        .route("/ask-gemini", post(handlers::ask_gemini))
        .route("/extract-links", post(handlers::extract_links))
        .route("/generate-pdf", post(handlers::generate_pdf))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(config: ServerConfig, api_key: ApiKey) -> Result<()> {
    let addr: SocketAddr = config
        .bind
        .parse()
        .with_context(|| format!("invalid bind address: {}", config.bind))?;

    let gemini = GeminiClient::new(api_key, &config);
    let state = AppState { config, gemini };
    let app = router(state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("briefly listening on http://{addr}");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
