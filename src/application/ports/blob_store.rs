use std::io;

use crate::domain::StoragePath;

#[async_trait::async_trait]
pub trait BlobStore: Send + Sync {
    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, BlobStoreError>;

    /// Writes an object, replacing any existing object at the path.
    async fn put(
        &self,
        path: &StoragePath,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<(), BlobStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum BlobStoreError {
    #[error("configuration: {0}")]
    Configuration(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
