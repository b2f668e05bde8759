//! Error types for pipeline generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, writing or reading pipeline configs
#[derive(Debug, Error)]
pub enum Error {
    /// The requested pipeline type is not one of the known types
    #[error(
        "Unknown pipeline type '{0}' (expected one of: s3_to_snowflake, snowflake_to_email, api_to_snowflake, ftp_to_snowflake)"
    )]
    UnknownPipelineType(String),

    /// A required answer was not provided or was blank
    #[error("Missing answer for '{0}'")]
    MissingAnswer(String),

    /// A filesystem operation failed
    #[error("Failed to {action} {}: {source}", .path.display())]
    DependencyFailure {
        /// What was being attempted (e.g. "write", "read")
        action: &'static str,
        /// The path involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// YAML (de)serialization failed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Wrap an I/O error with the action and path that caused it
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DependencyFailure {
            action,
            path: path.into(),
            source,
        }
    }
}
