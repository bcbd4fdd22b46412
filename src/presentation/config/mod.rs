mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AsrSettings, DatabaseSettings, DenoiserProviderSetting, DenoiserSettings, LoggingSettings,
    ProcessingSettings, ServerSettings, Settings, StorageProviderSetting, StorageSettings,
};
