//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive covering every huetag crate.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "huetag=debug",
            LogLevel::Info => "huetag=info",
            LogLevel::Warn => "huetag=warn",
            LogLevel::Error => "huetag=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
