//! Configuration management for Biblio

use std::path::PathBuf;

use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Path of the persisted catalog file, relative to the working directory.
    pub file: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from an optional `biblio.{toml,json,yaml}` file in
    /// the working directory, falling back to compiled-in defaults. No
    /// environment source is registered: the console contract is stdin and
    /// stdout only.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("catalog.file", "library.json")?
            .set_default("logging.level", "info")?
            .add_source(File::with_name("biblio").required(false))
            .build()?;

        config.try_deserialize()
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("library.json"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
