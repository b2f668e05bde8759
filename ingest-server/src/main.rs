use anyhow::Context;
use ingest_server::{AppState, ServerConfig, StorageBackend, create_router};
use ingest_storage::{InMemoryStore, ObjectStore, S3Store};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "ingest_server=debug,ingest_storage=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Ingest Upload Service...");

    let config = ServerConfig::from_env()?;
    config.validate()?;

    tracing::info!(
        "Loaded configuration: bucket={}, config_dir={}, storage={:?}",
        config.bucket,
        config.config_dir.display(),
        config.storage
    );

    let store: Arc<dyn ObjectStore> = match config.storage {
        StorageBackend::S3 => Arc::new(S3Store::from_env().await),
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, uploads will not be persisted");
            Arc::new(InMemoryStore::new())
        }
    };

    let addr = config.bind_addr.clone();
    let app = create_router(AppState::new(config, store));

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
