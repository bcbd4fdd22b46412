use std::path::Path;

use async_trait::async_trait;

/// Noise reduction over a file on disk. Implementations write the
/// cleaned audio to `output`, must leave `input` untouched, and must
/// absorb failures of the underlying capability (crash, non-zero exit,
/// empty output) into a `DenoiseError` instead of panicking. Whether a
/// failed denoise aborts anything is the caller's policy, not the
/// adapter's.
#[async_trait]
pub trait Denoiser: Send + Sync {
    async fn denoise(&self, input: &Path, output: &Path) -> Result<(), DenoiseError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DenoiseError {
    #[error("tool exited with failure: {0}")]
    ToolFailed(String),
    #[error("no output file produced: {0}")]
    MissingOutput(String),
    #[error("output file is empty: {0}")]
    EmptyOutput(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
