//! Configuration loading utilities

use crate::Config;
use getbuilds_common::{GetbuildsError, Result as GetbuildsResult};
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file
pub const CONFIG_PATH_VAR: &str = "GETBUILDS_CONFIG_PATH";

/// Configuration file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "getbuilds.yaml";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Variable name
        var: String,
        /// Parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for GetbuildsError {
    fn from(err: ConfigError) -> Self {
        GetbuildsError::config_with_source("Configuration could not be loaded", err)
    }
}

/// Configuration loader for the localization tools
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        Self::load_config_with(path, |var| env::var(var).ok())
    }

    /// Like [`ConfigLoader::load_config`], reading overrides through `lookup`
    pub fn load_config_with<P, F>(path: P, lookup: F) -> Result<Config, ConfigError>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        debug!("Reading configuration from {}", path.as_ref().display());
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Config = serde_yaml::from_str(&content)?;
        Self::finish(config, lookup)
    }

    /// Load configuration from the environment and the usual file locations.
    ///
    /// `GETBUILDS_CONFIG_PATH` wins, then `getbuilds.yaml` in the working
    /// directory, then built-in defaults. Overrides apply in every case.
    pub fn load() -> GetbuildsResult<Config> {
        let config = if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::load_config(&config_path)?
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::load_config(DEFAULT_CONFIG_FILE)?
        } else {
            info!("No configuration file found, using defaults");
            Self::finish(Config::default(), |var| env::var(var).ok())?
        };

        Ok(config)
    }

    /// Defaults plus overrides read through `lookup`
    pub fn from_overrides<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::finish(Config::default(), lookup)
    }

    fn finish<F>(mut config: Config, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::apply_env_overrides(&mut config, lookup)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(locale) = lookup("GETBUILDS_LOCALE") {
            config.i18n.default_locale = locale;
        }

        if let Some(dir) = lookup("GETBUILDS_LOCALES_DIR") {
            config.i18n.locales_dir = Some(dir);
        }

        if let Some(require) = lookup("GETBUILDS_REQUIRE_COMPLETE") {
            config.i18n.require_complete =
                require
                    .trim()
                    .parse()
                    .map_err(|e| ConfigError::EnvParseError {
                        var: "GETBUILDS_REQUIRE_COMPLETE".to_string(),
                        source: Box::new(e),
                    })?;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(format) = lookup("LOG_FORMAT") {
            config.logging.format = format;
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.logging.file = Some(file);
        }

        Ok(())
    }
}
