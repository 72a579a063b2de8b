//! System configuration types: storage, logging, and the host window.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Session storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Overrides the platform data directory.
    pub data_dir: Option<PathBuf>,
    /// Disable persistence entirely and run in degraded mode.
    pub disabled: bool,
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for the panegrid crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "panegrid=trace",
            LogLevel::Debug => "panegrid=debug",
            LogLevel::Info => "panegrid=info",
            LogLevel::Warning => "panegrid=warn",
            LogLevel::Error => "panegrid=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

/// Host window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner height in logical pixels. Width follows the grid.
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "PaneGrid".into(),
            height: 900,
        }
    }
}
