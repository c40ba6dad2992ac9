//! Error types and utilities shared across the getbuilds crates

use thiserror::Error;

/// Result type alias for getbuilds operations
pub type Result<T> = std::result::Result<T, GetbuildsError>;

/// Workspace-wide error type
#[derive(Error, Debug)]
pub enum GetbuildsError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
        /// Underlying cause
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Localization resource errors
    #[error("Localization error: {message}")]
    Localization {
        /// What went wrong
        message: String,
        /// Locale the failure concerns, if any
        locale: Option<String>,
        /// Underlying cause
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GetbuildsError {
    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }
}
