mod config;
mod db;
mod errors;
mod evaluation;
mod interview;
mod llm_client;
mod models;
mod routes;
mod state;
mod store;
mod users;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::evaluation::Evaluator;
use crate::llm_client::{CompletionProvider, LlmClient};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::PgStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interview API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL. Tables are created on demand via GET /init_db.
    let db = create_pool(&config.database_url).await?;
    let store = Arc::new(PgStore::new(db));

    let evaluator = build_evaluator(&config)?;

    let state = AppState {
        store,
        evaluator,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// The provider key is read once here; without it the evaluator stays in
/// mock mode for the whole process.
fn build_evaluator(config: &Config) -> Result<Evaluator> {
    let timeout = Duration::from_secs(config.llm_timeout_secs);

    let Some(api_key) = config.anthropic_api_key.clone() else {
        warn!("ANTHROPIC_API_KEY not set. Using mock evaluation.");
        return Ok(Evaluator::new(None, timeout));
    };

    let client = LlmClient::new(api_key, timeout)?;
    let provider: Arc<dyn CompletionProvider> = Arc::new(client);
    info!(
        "LLM client initialized (model: {}, timeout: {}s)",
        llm_client::MODEL,
        config.llm_timeout_secs
    );
    Ok(Evaluator::new(Some(provider), timeout))
}
