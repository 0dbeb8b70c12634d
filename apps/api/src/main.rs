mod candidates;
mod config;
mod errors;
mod extraction;
mod models;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::candidates::store::CandidateStore;
use crate::config::Config;
use crate::extraction::extractor::MockExtractor;
use crate::extraction::vocabulary::Vocabulary;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Intake API v{}", env!("CARGO_PKG_VERSION"));

    let vocabulary = match &config.vocabulary_path {
        Some(path) => {
            let vocabulary = Vocabulary::from_file(path)
                .with_context(|| format!("Failed to load vocabulary from {}", path.display()))?;
            info!("Vocabulary loaded from {}", path.display());
            vocabulary
        }
        None => {
            let vocabulary = Vocabulary::default();
            vocabulary.validate()?;
            info!("Using built-in sample vocabulary");
            vocabulary
        }
    };

    if let Some(seed) = config.generator_seed {
        warn!(seed, "GENERATOR_SEED set; mock extraction is reproducible");
    }

    let extractor = Arc::new(MockExtractor::new(
        Arc::new(vocabulary),
        config.extraction_latency,
        config.generator_seed,
    ));
    info!(
        latency_ms = config.extraction_latency.as_millis() as u64,
        timeout_ms = config.extraction_timeout.as_millis() as u64,
        "Mock extractor initialized"
    );

    let state = AppState {
        config: config.clone(),
        extractor,
        candidates: CandidateStore::new(),
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
