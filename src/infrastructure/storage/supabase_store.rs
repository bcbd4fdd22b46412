use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::domain::StoragePath;

/// Supabase Storage over its REST API. Uploads set `x-upsert` so a
/// retried run overwrites the previous cleaned artifact.
pub struct SupabaseBlobStore {
    client: reqwest::Client,
    base_url: String,
    bucket: String,
    service_key: String,
}

impl SupabaseBlobStore {
    pub fn new(base_url: &str, bucket: &str, service_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            bucket: bucket.to_string(),
            service_key: service_key.to_string(),
        }
    }

    fn object_url(&self, path: &StoragePath) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url,
            self.bucket,
            path.as_str()
        )
    }
}

#[async_trait::async_trait]
impl BlobStore for SupabaseBlobStore {
    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, BlobStoreError> {
        let response = self
            .client
            .get(self.object_url(path))
            .bearer_auth(&self.service_key)
            .send()
            .await
            .map_err(|e| BlobStoreError::DownloadFailed(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(BlobStoreError::NotFound(path.as_str().to_string()));
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BlobStoreError::DownloadFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| BlobStoreError::DownloadFailed(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    async fn put(
        &self,
        path: &StoragePath,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<(), BlobStoreError> {
        let response = self
            .client
            .post(self.object_url(path))
            .bearer_auth(&self.service_key)
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", "true")
            .body(data)
            .send()
            .await
            .map_err(|e| BlobStoreError::UploadFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BlobStoreError::UploadFailed(format!(
                "status {}: {}",
                status, body
            )));
        }
        Ok(())
    }
}
