use config::{Config, Environment, File};
use once_cell::sync::OnceCell;
use serde::Deserialize;

/// Application configuration.
///
/// Loaded once from an optional `config.toml` next to the binary, with
/// `SWATCHY__`-prefixed environment variables overriding file values
/// (e.g. `SWATCHY__LOGGING__LEVEL=debug`). Every field has a default, so a
/// missing file is not an error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    logging: LoggingConfig,
    /// Override for the selection state file path. Defaults to the platform
    /// config dir when unset.
    state_file: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl AppConfig {
    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub fn state_file(&self) -> Option<&str> {
        self.state_file.as_deref()
    }
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

static CONFIG: OnceCell<Result<AppConfig, String>> = OnceCell::new();

fn load_config() -> Result<AppConfig, String> {
    let builder = Config::builder()
        .add_source(File::with_name("config").required(false))
        .add_source(Environment::with_prefix("SWATCHY").separator("__"));

    let config = builder
        .build()
        .map_err(|e| format!("Configuration loading failed: {e}"))?;

    config
        .try_deserialize::<AppConfig>()
        .map_err(|e| format!("Failed to deserialize config: {e}"))
}

pub fn get_config() -> &'static Result<AppConfig, String> {
    CONFIG.get_or_init(load_config)
}

pub fn get_config_or_panic() -> &'static AppConfig {
    match get_config() {
        Ok(config) => config,
        Err(e) => panic!("Failed to load config: {e}"),
    }
}
