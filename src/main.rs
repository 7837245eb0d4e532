use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vod_ingestion::app;
use vod_ingestion::config::settings::AppConfig;
use vod_ingestion::infrastructure::transcoder::TranscoderClient;
use vod_ingestion::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting VOD ingestion service...");

    // Missing configuration is fatal before any event is accepted.
    let config = AppConfig::new().context("invalid configuration")?;
    let transcoder = TranscoderClient::from_config(&config);
    let port = config.server_port;

    let state = AppState::new(config, Arc::new(transcoder));
    let app = app::create_app(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
