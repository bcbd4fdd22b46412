use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub storage: StorageSettings,
    pub denoiser: DenoiserSettings,
    pub asr: AsrSettings,
    pub processing: ProcessingSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub local_path: String,
    pub supabase_url: Option<String>,
    pub supabase_service_key: Option<String>,
    pub supabase_bucket: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderSetting {
    Local,
    Supabase,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DenoiserSettings {
    pub provider: DenoiserProviderSetting,
    /// Executable name or path of the noise-reduction CLI.
    pub command: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenoiserProviderSetting {
    DeepFilter,
    Passthrough,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AsrSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessingSettings {
    /// Scratch directory for per-file temp audio; `raw/` and `cleaned/`
    /// are created beneath it.
    pub work_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}
