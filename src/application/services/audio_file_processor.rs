use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::{
    BlobStore, BlobStoreError, Denoiser, ProjectRepository, RepositoryError, Transcriber,
    TranscriptionError,
};
use crate::domain::{AudioFile, AudioFileId, StoragePath, TranscriptionStatus};

const CLEANED_CONTENT_TYPE: &str = "audio/wav";

/// How the cleaned artifact was obtained for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenoiseOutcome {
    Denoised,
    /// Noise reduction failed; the raw audio was used verbatim.
    OriginalFallback,
}

/// Processes one audio file end to end: download, denoise, upload the
/// cleaned artifact, transcribe, persist the result. Failures are
/// recorded on the file and reported as `false`; they never propagate
/// to the batch.
pub struct AudioFileProcessor<T> {
    repository: Arc<dyn ProjectRepository>,
    blob_store: Arc<dyn BlobStore>,
    denoiser: Arc<dyn Denoiser>,
    transcriber: Arc<T>,
    raw_dir: PathBuf,
    cleaned_dir: PathBuf,
}

impl<T> AudioFileProcessor<T>
where
    T: Transcriber,
{
    pub fn new(
        repository: Arc<dyn ProjectRepository>,
        blob_store: Arc<dyn BlobStore>,
        denoiser: Arc<dyn Denoiser>,
        transcriber: Arc<T>,
        work_dir: &Path,
    ) -> Result<Self, io::Error> {
        let raw_dir = work_dir.join("raw");
        let cleaned_dir = work_dir.join("cleaned");
        std::fs::create_dir_all(&raw_dir)?;
        std::fs::create_dir_all(&cleaned_dir)?;
        Ok(Self {
            repository,
            blob_store,
            denoiser,
            transcriber,
            raw_dir,
            cleaned_dir,
        })
    }

    /// Returns `true` only when every step succeeded. On failure the
    /// file is already marked `failed` with the captured message.
    pub async fn process(&self, file: &AudioFile) -> bool {
        if let Err(e) = self
            .repository
            .update_audio_file_status(file.id, TranscriptionStatus::Processing, None)
            .await
        {
            tracing::error!(
                file_id = %file.id.as_uuid(),
                error = %e,
                "Failed to claim audio file for processing"
            );
            self.record_failure(file.id, &format!("failed to claim file: {}", e))
                .await;
            return false;
        }

        let workspace = TempWorkspace::for_file(&self.raw_dir, &self.cleaned_dir, file);
        let result = self.run_pipeline(file, &workspace).await;
        workspace.cleanup().await;

        match result {
            Ok(outcome) => {
                tracing::info!(
                    file_id = %file.id.as_uuid(),
                    outcome = ?outcome,
                    "Audio file processed"
                );
                true
            }
            Err(e) => {
                tracing::error!(
                    file_id = %file.id.as_uuid(),
                    error = %e,
                    "Audio file processing failed"
                );
                self.record_failure(file.id, &e.to_string()).await;
                false
            }
        }
    }

    async fn run_pipeline(
        &self,
        file: &AudioFile,
        workspace: &TempWorkspace,
    ) -> Result<DenoiseOutcome, FileProcessingError> {
        let raw_bytes = self
            .blob_store
            .fetch(&file.file_path_raw)
            .await
            .map_err(FileProcessingError::Download)?;
        tracing::debug!(bytes = raw_bytes.len(), "Raw audio downloaded");

        tokio::fs::write(&workspace.raw, &raw_bytes)
            .await
            .map_err(FileProcessingError::TempFile)?;

        let outcome = self.clean_audio(workspace).await?;

        let cleaned_bytes = tokio::fs::read(&workspace.cleaned)
            .await
            .map_err(FileProcessingError::TempFile)?;

        let cleaned_path = file.file_path_raw.cleaned();
        self.blob_store
            .put(&cleaned_path, cleaned_bytes.clone(), CLEANED_CONTENT_TYPE)
            .await
            .map_err(FileProcessingError::Upload)?;
        tracing::debug!(path = %cleaned_path, "Cleaned audio uploaded");

        self.repository
            .update_audio_file_cleaned_path(file.id, &cleaned_path)
            .await
            .map_err(FileProcessingError::Repository)?;

        let transcription = self
            .transcriber
            .transcribe(&cleaned_bytes, cleaned_path.filename())
            .await
            .map_err(FileProcessingError::Transcription)?;

        self.repository
            .update_audio_file_transcription(file.id, &transcription, TranscriptionStatus::Completed)
            .await
            .map_err(FileProcessingError::Repository)?;

        Ok(outcome)
    }

    /// Denoises the temp raw file into the temp cleaned file. A failing
    /// denoiser degrades to a verbatim copy of the raw audio; only the
    /// copy itself can fail the step.
    async fn clean_audio(
        &self,
        workspace: &TempWorkspace,
    ) -> Result<DenoiseOutcome, FileProcessingError> {
        match self
            .denoiser
            .denoise(&workspace.raw, &workspace.cleaned)
            .await
        {
            Ok(()) => Ok(DenoiseOutcome::Denoised),
            Err(e) => {
                tracing::warn!(error = %e, "Noise reduction failed, keeping original audio");
                tokio::fs::copy(&workspace.raw, &workspace.cleaned)
                    .await
                    .map_err(FileProcessingError::TempFile)?;
                Ok(DenoiseOutcome::OriginalFallback)
            }
        }
    }

    async fn record_failure(&self, id: AudioFileId, message: &str) {
        if let Err(e) = self
            .repository
            .update_audio_file_status(id, TranscriptionStatus::Failed, Some(message))
            .await
        {
            tracing::error!(
                file_id = %id.as_uuid(),
                error = %e,
                "Failed to record audio file failure"
            );
        }
    }
}

/// Scratch paths for one file, namespaced by file id so overlapping
/// runs sharing a work dir cannot collide.
struct TempWorkspace {
    raw: PathBuf,
    cleaned: PathBuf,
}

impl TempWorkspace {
    fn for_file(raw_dir: &Path, cleaned_dir: &Path, file: &AudioFile) -> Self {
        let filename = file.file_path_raw.filename();
        let cleaned_name = StoragePath::from_raw(filename).cleaned();
        Self {
            raw: raw_dir.join(format!("{}_{}", file.id.as_uuid(), filename)),
            cleaned: cleaned_dir.join(format!("{}_{}", file.id.as_uuid(), cleaned_name.as_str())),
        }
    }

    /// Removes both temp files; runs on every exit path.
    async fn cleanup(&self) {
        for path in [&self.raw, &self.cleaned] {
            match tokio::fs::remove_file(path).await {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to remove temp file");
                }
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FileProcessingError {
    #[error("download: {0}")]
    Download(BlobStoreError),
    #[error("temp file: {0}")]
    TempFile(io::Error),
    #[error("upload: {0}")]
    Upload(BlobStoreError),
    #[error("repository: {0}")]
    Repository(RepositoryError),
    #[error("transcription: {0}")]
    Transcription(TranscriptionError),
}
