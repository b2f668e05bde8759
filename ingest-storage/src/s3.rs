//! Amazon S3 backed store

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use std::path::Path;

use crate::ObjectStore;
use crate::error::{Result, StorageError};

/// Object store writing to S3 through the AWS SDK
#[derive(Debug, Clone)]
pub struct S3Store {
    client: Client,
}

impl S3Store {
    /// Create a store using the default AWS credential and region chain
    ///
    /// Credentials are resolved from the environment, shared config files or
    /// the instance role, in the SDK's usual order.
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self {
            client: Client::new(&config),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn upload(&self, local_path: &Path, bucket: &str, key: &str) -> Result<()> {
        let body = ByteStream::from_path(local_path)
            .await
            .map_err(|e| StorageError::ReadFile {
                path: local_path.to_path_buf(),
                source: std::io::Error::other(e),
            })?;

        tracing::debug!("Uploading {:?} to s3://{}/{}", local_path, bucket, key);

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body)
            .send()
            .await
            .map_err(|e| StorageError::upload(bucket, key, DisplayErrorContext(e).to_string()))?;

        tracing::info!("Uploaded s3://{}/{}", bucket, key);

        Ok(())
    }
}
