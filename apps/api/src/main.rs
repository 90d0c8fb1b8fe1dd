mod analysis;
mod config;
mod errors;
mod gating;
mod migration;
mod models;
mod routes;
mod state;
mod storage;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::readiness::{HeuristicReadinessScorer, ReadinessScorer};
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::build_store;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Readiness API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize storage (in-memory by default, Redis via STORAGE_BACKEND=redis)
    let store = build_store(&config).await?;

    let scorer: Arc<dyn ReadinessScorer> = Arc::new(HeuristicReadinessScorer);
    info!("Readiness scorer: {}", scorer.backend());

    let state = AppState::new(store, config.clone(), scorer);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
