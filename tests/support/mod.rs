#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;

use clearspeech::application::ports::{
    BlobStore, BlobStoreError, DenoiseError, Denoiser, ProjectRepository, RepositoryError,
    Transcriber, TranscriptionError,
};
use clearspeech::domain::{
    AudioFile, AudioFileId, Project, ProjectId, ProjectStatus, StoragePath, TranscriptionStatus,
    UserId,
};

/// Everything the services wrote through the repository port, in call
/// order.
#[derive(Debug, Clone, PartialEq)]
pub enum RepoEvent {
    ProjectStatus(ProjectStatus),
    Progress(u8),
    FileStatus(AudioFileId, TranscriptionStatus, Option<String>),
    FileTranscription(AudioFileId, String, TranscriptionStatus),
    FileCleanedPath(AudioFileId, String),
}

pub struct RecordingProjectRepository {
    pub project: Option<Project>,
    pub pending: Vec<AudioFile>,
    pub events: Mutex<Vec<RepoEvent>>,
    pub fail_progress_updates: bool,
}

impl RecordingProjectRepository {
    pub fn new(project: Option<Project>, pending: Vec<AudioFile>) -> Self {
        Self {
            project,
            pending,
            events: Mutex::new(Vec::new()),
            fail_progress_updates: false,
        }
    }

    pub fn events(&self) -> Vec<RepoEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn project_statuses(&self) -> Vec<ProjectStatus> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                RepoEvent::ProjectStatus(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    pub fn progress_values(&self) -> Vec<u8> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                RepoEvent::Progress(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: RepoEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl ProjectRepository for RecordingProjectRepository {
    async fn get_project(
        &self,
        id: ProjectId,
        user_id: UserId,
    ) -> Result<Option<Project>, RepositoryError> {
        Ok(self
            .project
            .as_ref()
            .filter(|p| p.id == id && p.created_by == user_id)
            .cloned())
    }

    async fn update_project_status(
        &self,
        _id: ProjectId,
        _user_id: UserId,
        status: ProjectStatus,
    ) -> Result<(), RepositoryError> {
        self.record(RepoEvent::ProjectStatus(status));
        Ok(())
    }

    async fn update_project_progress(
        &self,
        _id: ProjectId,
        progress: u8,
    ) -> Result<(), RepositoryError> {
        if self.fail_progress_updates {
            return Err(RepositoryError::QueryFailed(
                "progress write rejected".to_string(),
            ));
        }
        self.record(RepoEvent::Progress(progress));
        Ok(())
    }

    async fn list_pending_audio_files(
        &self,
        _project_id: ProjectId,
    ) -> Result<Vec<AudioFile>, RepositoryError> {
        Ok(self.pending.clone())
    }

    async fn update_audio_file_status(
        &self,
        id: AudioFileId,
        status: TranscriptionStatus,
        error_message: Option<&str>,
    ) -> Result<(), RepositoryError> {
        self.record(RepoEvent::FileStatus(
            id,
            status,
            error_message.map(String::from),
        ));
        Ok(())
    }

    async fn update_audio_file_transcription(
        &self,
        id: AudioFileId,
        transcription: &str,
        status: TranscriptionStatus,
    ) -> Result<(), RepositoryError> {
        self.record(RepoEvent::FileTranscription(
            id,
            transcription.to_string(),
            status,
        ));
        Ok(())
    }

    async fn update_audio_file_cleaned_path(
        &self,
        id: AudioFileId,
        path: &StoragePath,
    ) -> Result<(), RepositoryError> {
        self.record(RepoEvent::FileCleanedPath(id, path.as_str().to_string()));
        Ok(())
    }
}

pub struct InMemoryBlobStore {
    pub objects: Mutex<HashMap<String, (Vec<u8>, String)>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self {
            objects: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_object(self, path: &str, data: &[u8]) -> Self {
        self.objects
            .lock()
            .unwrap()
            .insert(path.to_string(), (data.to_vec(), String::new()));
        self
    }

    pub fn object(&self, path: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .unwrap()
            .get(path)
            .map(|(data, _)| data.clone())
    }

    pub fn content_type(&self, path: &str) -> Option<String> {
        self.objects
            .lock()
            .unwrap()
            .get(path)
            .map(|(_, ct)| ct.clone())
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, BlobStoreError> {
        self.objects
            .lock()
            .unwrap()
            .get(path.as_str())
            .map(|(data, _)| data.clone())
            .ok_or_else(|| BlobStoreError::NotFound(path.as_str().to_string()))
    }

    async fn put(
        &self,
        path: &StoragePath,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<(), BlobStoreError> {
        self.objects
            .lock()
            .unwrap()
            .insert(path.as_str().to_string(), (data, content_type.to_string()));
        Ok(())
    }
}

/// Writes fixed bytes to the output path, standing in for a denoiser
/// that actually transformed the audio.
pub struct StubDenoiser {
    pub output: Vec<u8>,
}

#[async_trait]
impl Denoiser for StubDenoiser {
    async fn denoise(&self, _input: &Path, output: &Path) -> Result<(), DenoiseError> {
        tokio::fs::write(output, &self.output).await?;
        Ok(())
    }
}

pub struct FailingDenoiser;

#[async_trait]
impl Denoiser for FailingDenoiser {
    async fn denoise(&self, _input: &Path, _output: &Path) -> Result<(), DenoiseError> {
        Err(DenoiseError::ToolFailed("simulated crash".to_string()))
    }
}

pub struct StaticTranscriber {
    pub text: String,
}

impl StaticTranscriber {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

#[async_trait]
impl Transcriber for StaticTranscriber {
    async fn transcribe(
        &self,
        _audio: &[u8],
        _filename: &str,
    ) -> Result<String, TranscriptionError> {
        Ok(self.text.clone())
    }
}

pub struct FailingTranscriber;

#[async_trait]
impl Transcriber for FailingTranscriber {
    async fn transcribe(
        &self,
        _audio: &[u8],
        _filename: &str,
    ) -> Result<String, TranscriptionError> {
        Err(TranscriptionError::ServiceError(
            "status 500 Internal Server Error: model exploded".to_string(),
        ))
    }
}
