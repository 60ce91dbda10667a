mod ats;
mod board;
mod config;
mod errors;
mod geo;
mod models;
mod resume;
mod routes;
mod search;
mod seed;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::board::JobBoard;
use crate::config::Config;
use crate::routes::build_router;
use crate::search::SearchCriteria;
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

    info!("Starting Jobs API v{}", env!("CARGO_PKG_VERSION"));

    let postings = match &config.seed_jobs_path {
        Some(path) => seed::load_postings(path)?,
        None => Vec::new(),
    };
    let board = JobBoard::with_postings(config.default_radius_km, postings);
    info!(
        "Job board ready: {} postings, default radius {} km",
        board.posting_count(),
        config.default_radius_km
    );

    // Log every board change; held for the lifetime of the server
    let audit = board.subscribe(SearchCriteria::default(), |snapshot| {
        info!("Board snapshot: {} postings", snapshot.len());
    });
    info!("Audit subscription {} registered", audit.id());

    let state = AppState::new(config.clone(), board);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
