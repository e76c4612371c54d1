//! # pmx-api — Binary Entry Point
//!
//! Loads the dataset, then serves the API on `PORT` (default 8080).

use pmx_api::state::{AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    let port = config.port;

    let state = AppState::from_config(config).map_err(|e| {
        tracing::error!("dataset load failed: {e}");
        e
    })?;
    tracing::info!(countries = state.dataset.len(), "dataset ready");

    let app = pmx_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("policy matrix API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
