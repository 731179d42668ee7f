mod career;
mod config;
mod errors;
mod jobs;
mod matching;
mod resume;
mod routes;
mod skills;
mod state;
mod trends;
mod verify;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::jobs::catalog::JobCatalog;
use crate::jobs::sources::{adzuna::AdzunaSource, remoteok::RemoteOkSource};
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

    info!("Starting CareerHub API v{}", env!("CARGO_PKG_VERSION"));

    // Live sources in priority order; the static fallback lives inside the
    // catalog. Nothing is fetched until the first request needs the catalog.
    let primary = AdzunaSource::new(
        config.adzuna_endpoint.clone(),
        config.adzuna_app_id.clone(),
        config.adzuna_app_key.clone(),
    );
    let secondary = RemoteOkSource::new(config.remoteok_endpoint.clone());
    let catalog = Arc::new(JobCatalog::new(Box::new(primary), Box::new(secondary)));
    info!("Job catalog initialized (lazy populate on first request)");

    let state = AppState {
        catalog,
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
