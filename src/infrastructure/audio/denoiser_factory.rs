use std::sync::Arc;

use crate::application::ports::Denoiser;
use crate::presentation::config::{DenoiserProviderSetting, DenoiserSettings};

use super::deep_filter_denoiser::DeepFilterDenoiser;
use super::passthrough_denoiser::PassthroughDenoiser;

pub struct DenoiserFactory;

impl DenoiserFactory {
    pub async fn create(settings: &DenoiserSettings) -> Arc<dyn Denoiser> {
        match settings.provider {
            DenoiserProviderSetting::DeepFilter => {
                let denoiser = DeepFilterDenoiser::new(&settings.command);
                match denoiser.probe().await {
                    Ok(version) => {
                        tracing::info!(version = %version.trim(), "DeepFilter tool available");
                    }
                    Err(e) => {
                        tracing::warn!(
                            command = %settings.command,
                            error = %e,
                            "DeepFilter probe failed; files will fall back to original audio"
                        );
                    }
                }
                Arc::new(denoiser)
            }
            DenoiserProviderSetting::Passthrough => Arc::new(PassthroughDenoiser),
        }
    }
}
