use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bima_api::config::Config;
use bima_api::llm_client::{LlmClient, TextGenerator};
use bima_api::recommend::RuleTable;
use bima_api::routes::build_router;
use bima_api::state::AppState;

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

    info!("Starting Bima API v{}", env!("CARGO_PKG_VERSION"));

    // Rule table: built-in defaults unless RULES_PATH overrides them
    let rules = match &config.rules_path {
        Some(path) => {
            let rules = RuleTable::from_path(path)?;
            info!("Loaded rule table from {}", path.display());
            rules
        }
        None => RuleTable::default(),
    };

    // Initialize LLM client
    let llm = LlmClient::new(config.llm.clone())?;
    if llm.is_configured() {
        info!(
            "LLM client initialized (provider: {}, model: {})",
            llm.provider(),
            llm.model()
        );
    } else {
        warn!(
            "No API key for {}; recommendation refinement will use the local heuristic",
            llm.provider()
        );
    }

    let state = AppState::new(Arc::new(llm), rules, config.llm.timeout);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
