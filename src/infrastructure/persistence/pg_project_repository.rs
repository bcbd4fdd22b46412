use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;

use crate::application::ports::{ProjectRepository, RepositoryError};
use crate::domain::{
    AudioFile, AudioFileId, Project, ProjectId, ProjectStatus, StoragePath, TranscriptionStatus,
    UserId,
};

pub struct PgProjectRepository {
    pool: PgPool,
}

impl PgProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn query_failed(e: sqlx::Error) -> RepositoryError {
    RepositoryError::QueryFailed(e.to_string())
}

fn map_project(row: &PgRow) -> Result<Project, RepositoryError> {
    let status = row
        .try_get::<String, _>("status")
        .map_err(query_failed)?
        .parse::<ProjectStatus>()
        .map_err(RepositoryError::QueryFailed)?;
    let progress: i32 = row.try_get("progress").map_err(query_failed)?;

    Ok(Project {
        id: ProjectId::from_uuid(row.try_get("id").map_err(query_failed)?),
        name: row.try_get("name").map_err(query_failed)?,
        description: row.try_get("description").map_err(query_failed)?,
        status,
        progress: progress.clamp(0, 100) as u8,
        created_by: UserId::from_uuid(row.try_get("created_by").map_err(query_failed)?),
        created_at: row.try_get("created_at").map_err(query_failed)?,
        updated_at: row.try_get("updated_at").map_err(query_failed)?,
    })
}

fn map_audio_file(row: &PgRow) -> Result<AudioFile, RepositoryError> {
    let status = row
        .try_get::<String, _>("transcription_status")
        .map_err(query_failed)?
        .parse::<TranscriptionStatus>()
        .map_err(RepositoryError::QueryFailed)?;
    let raw_path: String = row.try_get("file_path_raw").map_err(query_failed)?;
    let cleaned_path: Option<String> = row.try_get("file_path_cleaned").map_err(query_failed)?;

    Ok(AudioFile {
        id: AudioFileId::from_uuid(row.try_get("id").map_err(query_failed)?),
        project_id: ProjectId::from_uuid(row.try_get("project_id").map_err(query_failed)?),
        file_path_raw: StoragePath::from_raw(raw_path),
        file_path_cleaned: cleaned_path.map(StoragePath::from_raw),
        transcription_status: status,
        transcription_content: row
            .try_get("transcription_content")
            .map_err(query_failed)?,
        error_message: row.try_get("error_message").map_err(query_failed)?,
        created_at: row.try_get("created_at").map_err(query_failed)?,
        updated_at: row.try_get("updated_at").map_err(query_failed)?,
    })
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    #[instrument(skip(self), fields(project_id = %id.as_uuid()))]
    async fn get_project(
        &self,
        id: ProjectId,
        user_id: UserId,
    ) -> Result<Option<Project>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, description, status, progress, created_by, created_at, updated_at
            FROM projects
            WHERE id = $1 AND created_by = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?;

        row.as_ref().map(map_project).transpose()
    }

    #[instrument(skip(self), fields(project_id = %id.as_uuid(), status = %status))]
    async fn update_project_status(
        &self,
        id: ProjectId,
        user_id: UserId,
        status: ProjectStatus,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            UPDATE projects
            SET status = $1, updated_at = $2
            WHERE id = $3 AND created_by = $4
            "#,
        )
        .bind(status.as_str())
        .bind(Utc::now())
        .bind(id.as_uuid())
        .bind(user_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(())
    }

    #[instrument(skip(self), fields(project_id = %id.as_uuid(), progress))]
    async fn update_project_progress(
        &self,
        id: ProjectId,
        progress: u8,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            UPDATE projects
            SET progress = $1, updated_at = $2
            WHERE id = $3
            "#,
        )
        .bind(progress as i32)
        .bind(Utc::now())
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(())
    }

    #[instrument(skip(self), fields(project_id = %project_id.as_uuid()))]
    async fn list_pending_audio_files(
        &self,
        project_id: ProjectId,
    ) -> Result<Vec<AudioFile>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, project_id, file_path_raw, file_path_cleaned,
                   transcription_status, transcription_content, error_message,
                   created_at, updated_at
            FROM audio_files
            WHERE project_id = $1 AND transcription_status = $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(project_id.as_uuid())
        .bind(TranscriptionStatus::Pending.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        rows.iter().map(map_audio_file).collect()
    }

    #[instrument(skip(self, error_message), fields(file_id = %id.as_uuid(), status = %status))]
    async fn update_audio_file_status(
        &self,
        id: AudioFileId,
        status: TranscriptionStatus,
        error_message: Option<&str>,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            UPDATE audio_files
            SET transcription_status = $1, error_message = $2, updated_at = $3
            WHERE id = $4
            "#,
        )
        .bind(status.as_str())
        .bind(error_message)
        .bind(Utc::now())
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(())
    }

    #[instrument(skip(self, transcription), fields(file_id = %id.as_uuid(), status = %status))]
    async fn update_audio_file_transcription(
        &self,
        id: AudioFileId,
        transcription: &str,
        status: TranscriptionStatus,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            UPDATE audio_files
            SET transcription_content = $1, transcription_status = $2,
                error_message = NULL, updated_at = $3
            WHERE id = $4
            "#,
        )
        .bind(transcription)
        .bind(status.as_str())
        .bind(Utc::now())
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(())
    }

    #[instrument(skip(self), fields(file_id = %id.as_uuid(), path = %path))]
    async fn update_audio_file_cleaned_path(
        &self,
        id: AudioFileId,
        path: &StoragePath,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            UPDATE audio_files
            SET file_path_cleaned = $1, updated_at = $2
            WHERE id = $3
            "#,
        )
        .bind(path.as_str())
        .bind(Utc::now())
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(())
    }
}
