//! Per-pane lifecycle configuration: timings, zoom policy, destinations.

use serde::{Deserialize, Serialize};

/// Pane lifecycle and session-state configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaneConfig {
    /// Minimum pane size in normal mode.
    pub min_width: u32,
    pub min_height: u32,
    /// Delay before a destination is dispatched to the surface (ms).
    pub load_delay_ms: u64,
    /// Retry delay when the surface is not ready yet (ms).
    pub not_ready_retry_ms: u64,
    /// Per-pane state autosave interval in seconds (valid range: 5-3600).
    pub autosave_interval_secs: u64,
    /// Delay after a successful load before cookies are saved (ms).
    pub cookie_save_delay_ms: u64,
    /// Zoom reapplication delays (ms).
    pub zoom_after_load_ms: u64,
    pub zoom_after_mode_switch_ms: u64,
    pub zoom_after_resize_ms: u64,
    /// Reference resolution the zoom policy scales against.
    pub reference_width: u32,
    pub reference_height: u32,
    /// Automatically adapt the zoom factor to the pane size.
    pub auto_resolution: bool,
    /// Search endpoint; the escaped query is appended verbatim.
    pub search_endpoint: String,
    /// Destination used for empty input.
    pub blank_destination: String,
    /// Destination loaded by the home action.
    pub home_destination: String,
}

impl Default for PaneConfig {
    fn default() -> Self {
        Self {
            min_width: 300,
            min_height: 200,
            load_delay_ms: 500,
            not_ready_retry_ms: 100,
            autosave_interval_secs: 30,
            cookie_save_delay_ms: 1000,
            zoom_after_load_ms: 500,
            zoom_after_mode_switch_ms: 200,
            zoom_after_resize_ms: 100,
            reference_width: 1920,
            reference_height: 1080,
            auto_resolution: true,
            search_endpoint: "https://www.google.com/search?q=".into(),
            blank_destination: "about:blank".into(),
            home_destination: "about:blank".into(),
        }
    }
}

/// Floating controls behaviour while a pane is fullscreen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Delay before hidden controls reappear after the pointer enters the hot zone (ms).
    pub reveal_delay_ms: u64,
    /// Idle period after which controls hide (ms).
    pub idle_hide_ms: u64,
    /// Height of the top hot zone in pixels.
    pub hot_zone_height: u32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 100,
            idle_hide_ms: 2000,
            hot_zone_height: 50,
        }
    }
}

/// Fullscreen transition settle delays.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FullscreenConfig {
    /// Delay before the promoted pane is forced to screen bounds (ms).
    pub enter_settle_ms: u64,
    /// Delay before normal size constraints are restored after demotion (ms).
    pub exit_settle_ms: u64,
}

impl Default for FullscreenConfig {
    fn default() -> Self {
        Self {
            enter_settle_ms: 100,
            exit_settle_ms: 50,
        }
    }
}
