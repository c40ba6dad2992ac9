//! Configuration schema

use getbuilds_common::{LogFormat, LoggingConfig};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// Localization settings
    #[validate]
    pub i18n: I18nSettings,

    /// Logging configuration
    #[validate]
    pub logging: LoggingSettings,
}

/// Localization settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct I18nSettings {
    /// Locale used when a caller does not name one
    #[validate(custom(
        function = "crate::validation::validate_locale_code",
        message = "Default locale must be a valid language identifier"
    ))]
    pub default_locale: String,

    /// Directory holding `<locale>/getbuilds.ftl` resources; the compiled-in
    /// resources are used when unset
    #[validate(custom(
        function = "crate::validation::validate_locales_dir",
        message = "Locales directory must exist"
    ))]
    pub locales_dir: Option<String>,

    /// Refuse to start when a locale misses reference keys
    pub require_complete: bool,
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            locales_dir: None,
            require_complete: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level
    #[validate(custom(
        function = "crate::validation::validate_log_level",
        message = "Log level must be one of: trace, debug, info, warn, error, off"
    ))]
    pub level: String,

    /// Line layout
    #[validate(custom(
        function = "crate::validation::validate_log_format",
        message = "Log format must be one of: pretty, compact, plain"
    ))]
    pub format: String,

    /// Log file path (optional)
    #[validate(length(min = 1, message = "Log file path cannot be empty if specified"))]
    pub file: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

impl LoggingSettings {
    /// Convert to the runtime logging configuration
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.to_ascii_lowercase(),
            format: LogFormat::from_name(&self.format).unwrap_or_default(),
            file_path: self.file.clone(),
            ..LoggingConfig::default()
        }
    }
}

impl Config {
    /// Validate the whole configuration
    pub fn validate_all(&self) -> Result<(), ValidationErrors> {
        self.validate()
    }
}
