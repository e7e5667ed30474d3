//! System configuration types: explorer folder and logging.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Card explorer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Bot folder scanned for a `cards/` directory.
    pub folder: Option<PathBuf>,
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing_subscriber` filter directive for this level.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "sash=trace",
            LogLevel::Debug => "sash=debug",
            LogLevel::Info => "sash=info",
            LogLevel::Warn => "sash=warn",
            LogLevel::Error => "sash=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
