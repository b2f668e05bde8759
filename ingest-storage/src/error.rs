//! Error types for object storage

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur when storing objects
#[derive(Debug, Error)]
pub enum StorageError {
    /// The local file to upload could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The object store rejected or failed the upload
    #[error("Upload to s3://{bucket}/{key} failed: {message}")]
    Upload {
        bucket: String,
        key: String,
        message: String,
    },
}

impl StorageError {
    /// Create an upload error for a destination
    pub fn upload(bucket: &str, key: &str, message: impl Into<String>) -> Self {
        Self::Upload {
            bucket: bucket.to_string(),
            key: key.to_string(),
            message: message.into(),
        }
    }
}
