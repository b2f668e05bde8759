//! Upload Service
//!
//! Resolves a slash command into a reply and, for pipeline selections,
//! stores the attached file in object storage.

use axum::body::Bytes;
use ingest_storage::{ObjectStore, StorageError, object_uri};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::service::command::Command;
use crate::service::reply::Reply;

/// A file attached to the command form
#[derive(Debug, Clone)]
pub struct Attachment {
    /// Original file name as sent by the client
    pub file_name: String,
    pub bytes: Bytes,
}

/// Service error type
#[derive(Debug)]
pub enum UploadError {
    /// A pipeline was selected but no file was attached
    MissingAttachment,
    /// The pipeline config directory could not be scanned
    Catalog(ingest_core::Error),
    /// The attachment could not be spooled to local disk
    Spool(std::io::Error),
    Storage(StorageError),
}

impl From<ingest_core::Error> for UploadError {
    fn from(err: ingest_core::Error) -> Self {
        UploadError::Catalog(err)
    }
}

impl From<StorageError> for UploadError {
    fn from(err: StorageError) -> Self {
        UploadError::Storage(err)
    }
}

impl From<std::io::Error> for UploadError {
    fn from(err: std::io::Error) -> Self {
        UploadError::Spool(err)
    }
}

pub type Result<T> = std::result::Result<T, UploadError>;

/// Handle one slash command
///
/// # Arguments
/// * `store` - Destination object store
/// * `bucket` - Destination bucket
/// * `config_dir` - Directory scanned for existing pipelines
/// * `text` - Command text as typed by the caller
/// * `file` - Optional attachment
pub async fn handle_command(
    store: &dyn ObjectStore,
    bucket: &str,
    config_dir: &Path,
    text: &str,
    file: Option<Attachment>,
) -> Result<Reply> {
    let pipelines = ingest_core::list_pipelines(config_dir)?;

    match Command::classify(text, &pipelines) {
        Command::Empty => Ok(Reply::choose_mode()),
        Command::New => Ok(Reply::new_pipeline_instructions()),
        Command::Existing => Ok(Reply::existing_pipelines(&pipelines)),
        Command::Select(selector) => {
            let pipeline = selector.resolve(&pipelines);
            let attachment = file.ok_or(UploadError::MissingAttachment)?;

            let location = store_attachment(store, bucket, pipeline, &attachment).await?;

            tracing::info!("Stored {} for pipeline {}", location, pipeline);

            Ok(Reply::uploaded(&location, pipeline))
        }
    }
}

/// Object key for a pipeline upload
pub fn object_key(pipeline: &str, file_name: &str) -> String {
    format!("{pipeline}/{file_name}")
}

/// Store an attachment under `{pipeline}/{file_name}` and return its URI
///
/// The bytes are spooled to a temporary file for the duration of the upload.
/// The temporary file is removed when this function returns, whether or not
/// the upload succeeded.
pub async fn store_attachment(
    store: &dyn ObjectStore,
    bucket: &str,
    pipeline: &str,
    attachment: &Attachment,
) -> Result<String> {
    let key = object_key(pipeline, &attachment.file_name);

    let spool = NamedTempFile::new()?;
    tokio::fs::write(spool.path(), &attachment.bytes).await?;

    tracing::debug!(
        "Spooled {} bytes to {:?} for s3://{}/{}",
        attachment.bytes.len(),
        spool.path(),
        bucket,
        key
    );

    store.upload(spool.path(), bucket, &key).await?;

    Ok(object_uri(bucket, &key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::service::reply::ResponseType;
    use ingest_storage::InMemoryStore;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Records the local path it was handed, then fails or succeeds
    struct RecordingStore {
        seen: Mutex<Option<(PathBuf, bool)>>,
        fail: bool,
    }

    impl RecordingStore {
        fn new(fail: bool) -> Self {
            Self {
                seen: Mutex::new(None),
                fail,
            }
        }

        fn seen(&self) -> (PathBuf, bool) {
            self.seen.lock().unwrap().clone().unwrap()
        }
    }

    #[async_trait]
    impl ObjectStore for RecordingStore {
        async fn upload(
            &self,
            local_path: &Path,
            bucket: &str,
            key: &str,
        ) -> ingest_storage::Result<()> {
            *self.seen.lock().unwrap() = Some((local_path.to_path_buf(), local_path.exists()));
            if self.fail {
                return Err(StorageError::upload(bucket, key, "access denied"));
            }
            Ok(())
        }
    }

    fn csv(name: &str) -> Attachment {
        Attachment {
            file_name: name.to_string(),
            bytes: Bytes::from_static(b"id,qty\n1,3\n"),
        }
    }

    fn config_dir(names: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in names {
            std::fs::write(dir.path().join(format!("{name}.yaml")), "").unwrap();
        }
        dir
    }

    #[tokio::test]
    async fn test_store_attachment_key_and_uri() {
        let store = InMemoryStore::new();
        let uri = store_attachment(&store, "chewy-ingest", "alpha", &csv("data.csv"))
            .await
            .unwrap();

        assert_eq!(uri, "s3://chewy-ingest/alpha/data.csv");
        assert_eq!(
            store.get("chewy-ingest", "alpha/data.csv").as_deref(),
            Some(&b"id,qty\n1,3\n"[..])
        );
    }

    #[tokio::test]
    async fn test_spool_removed_after_success() {
        let store = RecordingStore::new(false);
        store_attachment(&store, "b", "alpha", &csv("data.csv"))
            .await
            .unwrap();

        let (path, existed_during_upload) = store.seen();
        assert!(existed_during_upload);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_spool_removed_after_failure() {
        let store = RecordingStore::new(true);
        let result = store_attachment(&store, "b", "alpha", &csv("data.csv")).await;
        assert!(matches!(result, Err(UploadError::Storage(_))));

        let (path, _) = store.seen();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_selection_by_number() {
        let dir = config_dir(&["gamma", "alpha", "beta"]);
        let store = InMemoryStore::new();

        let reply = handle_command(&store, "bucket", dir.path(), "2", Some(csv("data.csv")))
            .await
            .unwrap();

        assert!(reply.text.contains("s3://bucket/beta/data.csv"));
        assert!(store.get("bucket", "beta/data.csv").is_some());
    }

    #[tokio::test]
    async fn test_selection_without_attachment() {
        let dir = config_dir(&["alpha"]);
        let store = InMemoryStore::new();

        let result = handle_command(&store, "bucket", dir.path(), "alpha", None).await;

        assert!(matches!(result, Err(UploadError::MissingAttachment)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_conversational_branches_ignore_attachment() {
        let dir = config_dir(&[]);
        let store = InMemoryStore::new();

        for text in ["", "new", "existing"] {
            let reply = handle_command(&store, "bucket", dir.path(), text, Some(csv("x.csv")))
                .await
                .unwrap();
            assert_eq!(reply.response_type, Some(ResponseType::Ephemeral));
        }
        assert!(store.is_empty());
    }
}
