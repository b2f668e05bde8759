//! Configuration module
//!
//! Handles CLI configuration shared by all commands.

use std::path::PathBuf;

use ingest_core::templates::DAG_CONFIG_DIR;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the generator writes into and the catalog reads from
    pub root: PathBuf,
}

impl Config {
    /// Directory holding generated pipeline configs
    pub fn config_dir(&self) -> PathBuf {
        self.root.join(DAG_CONFIG_DIR)
    }
}
