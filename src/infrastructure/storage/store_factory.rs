use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::presentation::config::{StorageProviderSetting, StorageSettings};

use super::local_store::LocalBlobStore;
use super::supabase_store::SupabaseBlobStore;

pub struct BlobStoreFactory;

impl BlobStoreFactory {
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn BlobStore>, BlobStoreError> {
        match settings.provider {
            StorageProviderSetting::Local => {
                let path = PathBuf::from(&settings.local_path);
                let store = LocalBlobStore::new(path)?;
                Ok(Arc::new(store))
            }
            StorageProviderSetting::Supabase => {
                let url = settings.supabase_url.as_deref().ok_or_else(|| {
                    BlobStoreError::Configuration("supabase_url required".into())
                })?;
                let key = settings.supabase_service_key.as_deref().ok_or_else(|| {
                    BlobStoreError::Configuration("supabase_service_key required".into())
                })?;
                let bucket = settings.supabase_bucket.as_deref().ok_or_else(|| {
                    BlobStoreError::Configuration("supabase_bucket required".into())
                })?;
                Ok(Arc::new(SupabaseBlobStore::new(url, bucket, key)))
            }
        }
    }
}
