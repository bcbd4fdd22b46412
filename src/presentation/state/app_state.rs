use std::sync::Arc;

use crate::application::ports::{ProjectRepository, Transcriber};
use crate::application::services::ProjectProcessingService;

pub struct AppState<T>
where
    T: Transcriber,
{
    pub processing_service: Arc<ProjectProcessingService<T>>,
    pub project_repository: Arc<dyn ProjectRepository>,
}

impl<T> Clone for AppState<T>
where
    T: Transcriber,
{
    fn clone(&self) -> Self {
        Self {
            processing_service: Arc::clone(&self.processing_service),
            project_repository: Arc::clone(&self.project_repository),
        }
    }
}
