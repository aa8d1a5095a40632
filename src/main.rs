use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use zoom_bridge::config::AppConfig;
use zoom_bridge::handlers;
use zoom_bridge::services::meetings::zoom::ZoomProvider;
use zoom_bridge::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let config = AppConfig::from_env();

    let default_filter = if config.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .init();

    if config.zoom.is_configured() {
        tracing::info!(user = %config.zoom_user_id, "Zoom credentials loaded");
    } else {
        tracing::warn!(
            missing = ?config.zoom.missing(),
            "Zoom credentials not configured, meeting creation will fail until they are set"
        );
    }
    tracing::info!(origin = %config.frontend_url, "CORS restricted to frontend origin");

    let provider = ZoomProvider::new(&config)?;

    let state = Arc::new(AppState {
        config: config.clone(),
        meetings: Box::new(provider),
    });

    let app = handlers::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
