mod aggregation;
mod catalog;
mod config;
mod errors;
mod models;
mod routes;
mod search;
mod session;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::worknet::WorkNetClient;
use crate::catalog::{Catalog, SampleData};
use crate::config::Config;
use crate::routes::build_router;
use crate::session::SessionStore;
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

    info!("Starting CareerScope API v{}", env!("CARGO_PKG_VERSION"));

    let catalog = build_catalog(&config)?;

    let state = AppState {
        catalog: Arc::new(catalog),
        sessions: SessionStore::with_limits(
            chrono::Duration::minutes(config.session_ttl_mins),
            config.max_sessions,
        ),
        config: config.clone(),
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

/// Picks the catalog's data tiers: sample data alone, or WorkNet in front of it
/// when an API key is configured.
fn build_catalog(config: &Config) -> Result<Catalog> {
    let sample = SampleData::load()?;

    let Some(api_key) = config.worknet_api_key.clone() else {
        return Ok(Catalog::sample_only(sample));
    };

    let timeout = Duration::from_secs(config.worknet_timeout_secs);
    let client = WorkNetClient::new(api_key, config.worknet_base_url.clone(), timeout)?;
    Ok(Catalog::with_live_source(sample, Arc::new(client), timeout))
}
