//! Structured logging bootstrap

use crate::error::{GetbuildsError, Result};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Output layout for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human friendly output
    #[default]
    Pretty,
    /// Single-line output suited to log files
    Compact,
    /// The default `tracing-subscriber` layout
    Plain,
}

impl LogFormat {
    /// Parse a format name as used in configuration files
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "pretty" => Some(Self::Pretty),
            "compact" => Some(Self::Compact),
            "plain" => Some(Self::Plain),
            _ => None,
        }
    }
}

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "getbuilds_i18n=debug")
    pub level: String,
    /// Line layout
    pub format: LogFormat,
    /// Optional file path for log output
    pub file_path: Option<String>,
    /// Whether to include span open/close events
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

fn open_log_file(path: &str) -> Result<Mutex<File>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(Mutex::new(file))
}

fn install_error(err: impl std::error::Error + Send + Sync + 'static) -> GetbuildsError {
    GetbuildsError::config_with_source("Failed to install tracing subscriber", err)
}

/// Initialize the tracing subscriber with the given configuration
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.format {
        LogFormat::Compact => {
            let layer = fmt::layer()
                .with_span_events(span_events)
                .with_target(config.include_targets)
                .compact();

            if let Some(path) = config.file_path.as_deref() {
                let file = open_log_file(path)?;
                registry
                    .with(layer.with_ansi(false).with_writer(file))
                    .try_init()
                    .map_err(install_error)
            } else {
                registry.with(layer).try_init().map_err(install_error)
            }
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .pretty()
                .with_span_events(span_events)
                .with_target(config.include_targets);

            if let Some(path) = config.file_path.as_deref() {
                let file = open_log_file(path)?;
                registry
                    .with(layer.with_ansi(false).with_writer(file))
                    .try_init()
                    .map_err(install_error)
            } else {
                registry.with(layer).try_init().map_err(install_error)
            }
        }
        LogFormat::Plain => {
            let layer = fmt::layer()
                .with_span_events(span_events)
                .with_target(config.include_targets);

            if let Some(path) = config.file_path.as_deref() {
                let file = open_log_file(path)?;
                registry
                    .with(layer.with_ansi(false).with_writer(file))
                    .try_init()
                    .map_err(install_error)
            } else {
                registry.with(layer).try_init().map_err(install_error)
            }
        }
    }
}
