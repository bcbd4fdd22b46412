mod asr_client;
mod deep_filter_denoiser;
mod denoiser_factory;
mod passthrough_denoiser;

pub use asr_client::AsrServiceClient;
pub use deep_filter_denoiser::DeepFilterDenoiser;
pub use denoiser_factory::DenoiserFactory;
pub use passthrough_denoiser::PassthroughDenoiser;
