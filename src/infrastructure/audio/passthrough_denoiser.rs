use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{DenoiseError, Denoiser};

/// Copies the input verbatim. Selected by configuration for
/// deployments without a noise-reduction tool installed.
pub struct PassthroughDenoiser;

#[async_trait]
impl Denoiser for PassthroughDenoiser {
    async fn denoise(&self, input: &Path, output: &Path) -> Result<(), DenoiseError> {
        if let Some(dir) = output.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        tokio::fs::copy(input, output).await?;
        Ok(())
    }
}
