//! Pool and grid geometry configuration types.

use serde::{Deserialize, Serialize};

/// Pane pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Number of pooled panes created at startup (valid range: 1-32).
    pub size: u32,
    /// Column count used before the stored setting is read (valid range: 1-3).
    pub default_columns: u32,
    /// Pool-wide state autosave interval in seconds (valid range: 10-3600).
    pub autosave_interval_secs: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            size: 16,
            default_columns: 2,
            autosave_interval_secs: 60,
        }
    }
}

/// Grid geometry: pane sizes per column count and container spacing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Pane width when the grid has a single column (valid range: 300-3840).
    pub single_column_width: u32,
    /// Pane width for two or three columns (valid range: 300-3840).
    pub multi_column_width: u32,
    /// Width:height ratio applied to every pane.
    pub aspect_width: u32,
    pub aspect_height: u32,
    /// Spacing between panes and between rows (valid range: 0-40).
    pub gap: u32,
    /// Margin around the grid canvas (valid range: 0-40).
    pub margin: u32,
    /// Extra horizontal space the host window reserves on each side.
    pub host_padding: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            single_column_width: 880,
            multi_column_width: 500,
            aspect_width: 5,
            aspect_height: 3,
            gap: 5,
            margin: 5,
            host_padding: 10,
        }
    }
}
