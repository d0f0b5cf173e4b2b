//! BetelBot HTTP service.
//!
//! Serves chat replies and accepts classifier results over REST.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use bb_api::config::ApiConfig;
use bb_api::routes;
use bb_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "bb-api starting");

    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("BETELBOT_CONFIG").ok());
    let config = ApiConfig::load(config_path.as_deref())?;

    let state = AppState::from_config(&config)?;
    tracing::info!(
        knowledge_entries = state.assistant.knowledge().len(),
        threshold = state.low_confidence_threshold,
        "assistant ready"
    );

    let app = routes::build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
