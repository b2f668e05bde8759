//! Server configuration
//!
//! Settings are read from environment variables with defaults suitable for
//! running next to the generator's output directory.

use anyhow::{Result, bail};
use std::path::PathBuf;

/// Bucket used when `S3_BUCKET` is not set
pub const DEFAULT_BUCKET: &str = "chewy-ingest";

/// Where uploaded files are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    S3,
    Memory,
}

/// Upload service configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: String,

    /// Destination bucket for uploads
    pub bucket: String,

    /// Directory scanned for generated pipeline configs
    pub config_dir: PathBuf,

    pub storage: StorageBackend,
}

impl ServerConfig {
    /// Creates a new configuration with defaults
    pub fn new() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            bucket: DEFAULT_BUCKET.to_string(),
            config_dir: PathBuf::from(ingest_core::templates::DAG_CONFIG_DIR),
            storage: StorageBackend::S3,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Recognized environment variables:
    /// - S3_BUCKET (optional, default: chewy-ingest)
    /// - DAG_CONFIG_DIR (optional, default: dag_configs)
    /// - UPLOAD_BIND_ADDR (optional, default: 0.0.0.0:8080)
    /// - INGEST_STORAGE (optional, `s3` or `memory`, default: s3)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::new();

        let storage = match lookup("INGEST_STORAGE").as_deref() {
            None | Some("s3") => StorageBackend::S3,
            Some("memory") => StorageBackend::Memory,
            Some(other) => bail!("INGEST_STORAGE must be 's3' or 'memory', got '{}'", other),
        };

        Ok(Self {
            bind_addr: lookup("UPLOAD_BIND_ADDR").unwrap_or(defaults.bind_addr),
            bucket: lookup("S3_BUCKET").unwrap_or(defaults.bucket),
            config_dir: lookup("DAG_CONFIG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.config_dir),
            storage,
        })
    }

    /// Set the config directory
    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = dir.into();
        self
    }

    /// Set the destination bucket
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.bucket.trim().is_empty() {
            bail!("bucket cannot be empty");
        }

        if self.bind_addr.trim().is_empty() {
            bail!("bind_addr cannot be empty");
        }

        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new()
    }
}
