//! API Module
//!
//! HTTP API layer for the upload service.

pub mod error;
pub mod health;
pub mod upload;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use ingest_storage::ObjectStore;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub store: Arc<dyn ObjectStore>,
}

impl AppState {
    pub fn new(config: ServerConfig, store: Arc<dyn ObjectStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness
        .route("/", get(health::health_check))
        // Slash command endpoint
        .route("/upload-pipeline", post(upload::upload_pipeline))
        .with_state(state)
        // Uploads are not size-limited
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
}
