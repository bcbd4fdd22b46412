use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Transcriber, TranscriptionError};

/// Client for the speech-recognition service: POSTs base64-encoded
/// audio to `/transcribe` and expects `{"transcription": "..."}` back.
pub struct AsrServiceClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct TranscribeRequest<'a> {
    audio_bytes: String,
    filename: &'a str,
}

#[derive(Deserialize)]
struct TranscribeResponse {
    transcription: String,
}

impl AsrServiceClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/transcribe", base_url.trim_end_matches('/')),
            timeout,
        }
    }
}

#[async_trait]
impl Transcriber for AsrServiceClient {
    async fn transcribe(
        &self,
        audio: &[u8],
        filename: &str,
    ) -> Result<String, TranscriptionError> {
        let request = TranscribeRequest {
            audio_bytes: BASE64.encode(audio),
            filename,
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            filename = %filename,
            bytes = audio.len(),
            "Sending audio to ASR service"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| TranscriptionError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ServiceError(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: TranscribeResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::MalformedResponse(e.to_string()))?;

        tracing::info!(chars = result.transcription.len(), "Transcription received");
        Ok(result.transcription)
    }
}
