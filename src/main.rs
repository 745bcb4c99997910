//! Matchboard API Server
//!
//! Run with: cargo run --bin matchboard
//!
//! # Configuration
//!
//! Read from the first config file found (see `config::Config::load_default`),
//! then overridden by environment variables:
//! - `MATCHBOARD_BACKEND_URL`: Table API base URL (empty runs without a backend)
//! - `MATCHBOARD_BACKEND_KEY`: Table API key
//! - `MATCHBOARD_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `MATCHBOARD_API_PORT`: Port to listen on (default: 8090)
//! - `MATCHBOARD_LOG_LEVEL`, `MATCHBOARD_LOG_FORMAT`
//! - `RUST_LOG`: Full filter directives, wins over the level above

use anyhow::Context;
use matchboard::api::{serve, AppState};
use matchboard::backend::{MemorySource, RecordSource, RestSource};
use matchboard::config::{BackendConfig, Config};
use matchboard::dashboard::DashboardController;
use matchboard::loader::DataLoader;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();

    matchboard::logging::init(&config.logging).context("Failed to initialize logging")?;

    tracing::info!("Starting Matchboard v{}", env!("CARGO_PKG_VERSION"));

    let source = record_source(&config.backend)?;
    let controller = Arc::new(DashboardController::new(DataLoader::new(source)));

    // Kick off the load cycle; the server answers with fallbacks until it settles
    Arc::clone(&controller).mount();

    let state = AppState::new(controller, config.api.clone());
    serve(state, &config.api).await?;

    Ok(())
}

fn record_source(backend: &BackendConfig) -> anyhow::Result<Arc<dyn RecordSource>> {
    if !backend.is_configured() {
        tracing::warn!("No backend URL configured, serving an empty dashboard");
        return Ok(Arc::new(MemorySource::new()));
    }

    let rest = backend.rest_source_config();
    tracing::info!(url = %rest.base_url, "Using table API backend");

    let source = RestSource::new(rest).context("Failed to create backend client")?;
    Ok(Arc::new(source))
}
