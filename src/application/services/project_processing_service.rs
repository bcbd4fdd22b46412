use std::sync::Arc;

use crate::application::ports::{ProjectRepository, RepositoryError, Transcriber};
use crate::domain::{completion_percent, ProjectId, ProjectStatus, UserId};

use super::AudioFileProcessor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSummary {
    pub total_files: usize,
    pub processed_files: usize,
    pub status: ProjectStatus,
}

/// Drives one full processing run for a project: claims the project,
/// walks its pending audio files in order, and reconciles the final
/// status. A file failure is isolated; an error anywhere else is fatal
/// to the run and archives the project.
pub struct ProjectProcessingService<T> {
    repository: Arc<dyn ProjectRepository>,
    processor: Arc<AudioFileProcessor<T>>,
}

impl<T> ProjectProcessingService<T>
where
    T: Transcriber,
{
    pub fn new(
        repository: Arc<dyn ProjectRepository>,
        processor: Arc<AudioFileProcessor<T>>,
    ) -> Self {
        Self {
            repository,
            processor,
        }
    }

    pub async fn run(
        &self,
        project_id: ProjectId,
        user_id: UserId,
    ) -> Result<ProcessingSummary, ProcessingError> {
        tracing::info!(
            project_id = %project_id.as_uuid(),
            user_id = %user_id.as_uuid(),
            "Starting project processing run"
        );

        match self.execute(project_id, user_id).await {
            Ok(summary) => Ok(summary),
            Err(e) => {
                // An unknown project was never claimed, so there is
                // nothing to archive.
                if !matches!(e, ProcessingError::ProjectNotFound(_)) {
                    self.archive_after_failure(project_id, user_id).await;
                }
                Err(e)
            }
        }
    }

    async fn execute(
        &self,
        project_id: ProjectId,
        user_id: UserId,
    ) -> Result<ProcessingSummary, ProcessingError> {
        let project = self
            .repository
            .get_project(project_id, user_id)
            .await?
            .ok_or(ProcessingError::ProjectNotFound(project_id))?;
        tracing::info!(status = %project.status, "Project loaded");

        self.repository
            .update_project_status(project_id, user_id, ProjectStatus::InProgress)
            .await?;

        let pending = self.repository.list_pending_audio_files(project_id).await?;
        let total = pending.len();
        tracing::info!(total, "Pending audio files fetched");

        let mut processed = 0usize;
        for (index, file) in pending.iter().enumerate() {
            tracing::info!(
                file_id = %file.id.as_uuid(),
                position = index + 1,
                total,
                path = %file.file_path_raw,
                "Processing audio file"
            );

            if self.processor.process(file).await {
                processed += 1;
            }

            let progress = completion_percent(index + 1, total);
            self.repository
                .update_project_progress(project_id, progress)
                .await?;
            tracing::info!(progress, "Project progress updated");
        }

        let final_status = if processed == total {
            ProjectStatus::Completed
        } else {
            ProjectStatus::Archived
        };

        self.repository
            .update_project_status(project_id, user_id, final_status)
            .await?;
        if final_status == ProjectStatus::Completed {
            self.repository
                .update_project_progress(project_id, 100)
                .await?;
        }

        tracing::info!(
            total,
            processed,
            status = %final_status,
            "Project processing finished"
        );

        Ok(ProcessingSummary {
            total_files: total,
            processed_files: processed,
            status: final_status,
        })
    }

    async fn archive_after_failure(&self, project_id: ProjectId, user_id: UserId) {
        if let Err(e) = self
            .repository
            .update_project_status(project_id, user_id, ProjectStatus::Archived)
            .await
        {
            tracing::error!(
                project_id = %project_id.as_uuid(),
                error = %e,
                "Failed to archive project after run error"
            );
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("project {} not found", .0.as_uuid())]
    ProjectNotFound(ProjectId),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}
