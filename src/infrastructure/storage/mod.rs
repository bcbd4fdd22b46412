mod local_store;
mod store_factory;
mod supabase_store;

pub use local_store::LocalBlobStore;
pub use store_factory::BlobStoreFactory;
pub use supabase_store::SupabaseBlobStore;
