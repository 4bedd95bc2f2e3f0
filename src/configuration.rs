use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings{
    pub application: ApplicationSettings,
    pub backend: BackendSettings
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApplicationSettings{
    pub host: String,
    pub port: u16
}

// Where the REST backend lives. Injected into every api client at construction.
#[derive(Deserialize, Debug, Clone)]
pub struct BackendSettings{
    pub base_url: String,
    #[serde(default)]
    pub timeout_milliseconds: Option<u64>
}

impl BackendSettings {
    pub fn timeout(&self) -> Option<Duration>{
        self.timeout_milliseconds.map(Duration::from_millis)
    }
}

impl Settings{
    pub fn get() -> Result<Self, config::ConfigError>{
        Config::builder()
            .add_source(File::with_name("configuration/base.yaml"))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
            )
            .build()?
            .try_deserialize::<Settings>()
    }
}
