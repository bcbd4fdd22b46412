use chrono::{DateTime, Utc};

use super::{AudioFileId, ProjectId, StoragePath, TranscriptionStatus};

/// One uploaded recording. At most one of `transcription_content` and
/// `error_message` is set at any time.
#[derive(Debug, Clone)]
pub struct AudioFile {
    pub id: AudioFileId,
    pub project_id: ProjectId,
    pub file_path_raw: StoragePath,
    pub file_path_cleaned: Option<StoragePath>,
    pub transcription_status: TranscriptionStatus,
    pub transcription_content: Option<String>,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AudioFile {
    pub fn new(project_id: ProjectId, file_path_raw: StoragePath) -> Self {
        let now = Utc::now();
        Self {
            id: AudioFileId::new(),
            project_id,
            file_path_raw,
            file_path_cleaned: None,
            transcription_status: TranscriptionStatus::Pending,
            transcription_content: None,
            error_message: None,
            created_at: now,
            updated_at: now,
        }
    }
}
