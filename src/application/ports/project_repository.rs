use async_trait::async_trait;

use crate::domain::{
    AudioFile, AudioFileId, Project, ProjectId, ProjectStatus, StoragePath, TranscriptionStatus,
    UserId,
};

use super::RepositoryError;

/// Row-level gateway for projects and their audio files. Ownership is
/// enforced at this boundary: project reads and status writes are
/// scoped to the owning user.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn get_project(
        &self,
        id: ProjectId,
        user_id: UserId,
    ) -> Result<Option<Project>, RepositoryError>;

    async fn update_project_status(
        &self,
        id: ProjectId,
        user_id: UserId,
        status: ProjectStatus,
    ) -> Result<(), RepositoryError>;

    async fn update_project_progress(
        &self,
        id: ProjectId,
        progress: u8,
    ) -> Result<(), RepositoryError>;

    /// Pending audio files of a project, most recently created first.
    async fn list_pending_audio_files(
        &self,
        project_id: ProjectId,
    ) -> Result<Vec<AudioFile>, RepositoryError>;

    async fn update_audio_file_status(
        &self,
        id: AudioFileId,
        status: TranscriptionStatus,
        error_message: Option<&str>,
    ) -> Result<(), RepositoryError>;

    async fn update_audio_file_transcription(
        &self,
        id: AudioFileId,
        transcription: &str,
        status: TranscriptionStatus,
    ) -> Result<(), RepositoryError>;

    async fn update_audio_file_cleaned_path(
        &self,
        id: AudioFileId,
        path: &StoragePath,
    ) -> Result<(), RepositoryError>;
}
