mod blob_store;
mod denoiser;
mod project_repository;
mod repository_error;
mod transcriber;

pub use blob_store::{BlobStore, BlobStoreError};
pub use denoiser::{DenoiseError, Denoiser};
pub use project_repository::ProjectRepository;
pub use repository_error::RepositoryError;
pub use transcriber::{Transcriber, TranscriptionError};
