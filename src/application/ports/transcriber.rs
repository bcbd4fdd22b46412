use async_trait::async_trait;

/// Speech-to-text over an in-memory audio payload. One attempt per
/// call; retry policy belongs to the caller.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: &[u8], filename: &str)
        -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("asr service error: {0}")]
    ServiceError(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
