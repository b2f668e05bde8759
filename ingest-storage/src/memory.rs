//! In-memory store
//!
//! Keeps uploaded objects in a map. Used for tests and for running the
//! upload service without cloud credentials.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::ObjectStore;
use crate::error::{Result, StorageError};

type Objects = BTreeMap<(String, String), Vec<u8>>;

/// Object store backed by a shared map of `(bucket, key) -> bytes`
///
/// Clones share the same objects.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    objects: Arc<Mutex<Objects>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the bytes stored at `bucket`/`key`
    pub fn get(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        self.lock()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    /// All stored `(bucket, key)` pairs in sorted order
    pub fn keys(&self) -> Vec<(String, String)> {
        self.lock().keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Objects> {
        self.objects.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ObjectStore for InMemoryStore {
    async fn upload(&self, local_path: &Path, bucket: &str, key: &str) -> Result<()> {
        let bytes = tokio::fs::read(local_path)
            .await
            .map_err(|source| StorageError::ReadFile {
                path: local_path.to_path_buf(),
                source,
            })?;

        tracing::debug!("Stored {} bytes at {}/{}", bytes.len(), bucket, key);

        self.lock().insert((bucket.to_string(), key.to_string()), bytes);
        Ok(())
    }
}
