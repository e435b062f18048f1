use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aqmon_service::config::ServiceConfig;
use aqmon_service::ingest::client::UpstreamClient;
use aqmon_service::sources::SOURCE_REGISTRY;
use aqmon_service::web::{AppState, router};

#[tokio::main]
async fn main() {
    // Honor a local .env before reading configuration; ignore a missing file.
    let _ = dotenv::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::from_env();
    let fetch = match UpstreamClient::new() {
        Ok(client) => Arc::new(client),
        Err(err) => {
            tracing::error!("failed to build upstream HTTP client: {}", err);
            std::process::exit(1);
        }
    };

    tracing::info!(
        openweather = config.openweather_key.is_some(),
        nasa = config.nasa_key_configured,
        "credentials configured"
    );
    for source in SOURCE_REGISTRY {
        tracing::info!("serving {} at {}", source.name, source.route);
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = router(AppState { config, fetch });

    tracing::info!("listening on {}", addr);
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind {}: {}", addr, err);
            std::process::exit(1);
        }
    };
    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!("server error: {}", err);
        std::process::exit(1);
    }
}
