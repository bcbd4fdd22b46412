mod audio_file_processor;
mod project_processing_service;

pub use audio_file_processor::{AudioFileProcessor, DenoiseOutcome, FileProcessingError};
pub use project_processing_service::{ProcessingError, ProcessingSummary, ProjectProcessingService};
