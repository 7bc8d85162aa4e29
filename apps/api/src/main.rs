mod analysis;
mod catalog;
mod config;
mod display;
mod errors;
mod intake;
mod llm_client;
mod models;
mod portal;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::gateway::GeminiGateway;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Akashic Portal v{}", env!("CARGO_PKG_VERSION"));

    if config.gemini_api_key.is_empty() {
        warn!("GEMINI_API_KEY is not set; gateway calls will be rejected upstream");
    }

    let llm = LlmClient::new(config.gemini_api_key.clone(), config.gemini_api_base.clone());
    info!(
        "LLM client initialized (model: {}, base: {})",
        llm_client::MODEL,
        config.gemini_api_base
    );

    let state = AppState {
        gateway: Arc::new(GeminiGateway::new(llm)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
