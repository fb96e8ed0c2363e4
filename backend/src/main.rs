//! Server entry point: configuration, logging, data directory setup.

use std::{net::SocketAddr, sync::Arc};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use garden_records_backend::{config::Config, create_app, store::JsonStore, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "garden_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Garden Records Server");
    tracing::info!("Environment: {}", config.environment);

    // Make sure the data tree exists before the first request
    let pics_dir = std::path::Path::new(&config.storage.data_dir).join("pics");
    tokio::fs::create_dir_all(&pics_dir).await?;
    tracing::info!("Data directory: {}", config.storage.data_dir);

    // Create application state
    let state = AppState {
        store: Arc::new(JsonStore::new(&config.storage.data_dir)),
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
