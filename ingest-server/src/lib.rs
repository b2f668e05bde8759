//! Ingest Upload Service
//!
//! HTTP service behind the chat slash command. It lists generated pipeline
//! configs, walks the caller through choosing a pipeline, and stores the
//! attached file in object storage under that pipeline's prefix.

pub mod api;
pub mod config;
pub mod service;

pub use api::{AppState, create_router};
pub use config::{ServerConfig, StorageBackend};
