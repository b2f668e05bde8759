//! Ingest Object Storage
//!
//! Storage capability used by the upload service to place files into a bucket.
//!
//! The [`ObjectStore`] trait is the seam: production code uses [`S3Store`],
//! tests and local runs use [`InMemoryStore`].
//!
//! # Example
//!
//! ```no_run
//! use ingest_storage::{ObjectStore, S3Store};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> ingest_storage::Result<()> {
//!     let store = S3Store::from_env().await;
//!     store
//!         .upload(Path::new("/tmp/data.csv"), "chewy-ingest", "orders/data.csv")
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod error;
mod memory;
mod s3;

pub use error::{Result, StorageError};
pub use memory::InMemoryStore;
pub use s3::S3Store;

use async_trait::async_trait;
use std::path::Path;

/// Capability to copy a local file into object storage
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload the file at `local_path` to `bucket` under `key`
    ///
    /// Existing objects at the same key are replaced.
    async fn upload(&self, local_path: &Path, bucket: &str, key: &str) -> Result<()>;
}

/// Format the `s3://` URI for an object
pub fn object_uri(bucket: &str, key: &str) -> String {
    format!("s3://{bucket}/{key}")
}
