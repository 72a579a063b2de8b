//! Runtime pane settings resolved from the config file.

use std::time::Duration;

use panegrid_common::Size;
use panegrid_config::PanegridConfig;

/// Timings and policies shared by every pane in a pool.
#[derive(Debug, Clone, PartialEq)]
pub struct PaneSettings {
    /// Minimum size while not fullscreen.
    pub min_size: Size,
    pub load_delay: Duration,
    pub not_ready_retry: Duration,
    pub autosave_interval: Duration,
    pub cookie_save_delay: Duration,
    pub zoom_after_load: Duration,
    pub zoom_after_mode_switch: Duration,
    pub zoom_after_resize: Duration,
    pub reference_size: Size,
    pub auto_resolution: bool,
    pub search_endpoint: String,
    pub blank_destination: String,
    pub home_destination: String,
    pub reveal_delay: Duration,
    pub idle_hide: Duration,
    pub hot_zone_height: f64,
}

impl PaneSettings {
    pub fn from_config(config: &PanegridConfig) -> Self {
        let pane = &config.pane;
        let controls = &config.controls;
        Self {
            min_size: Size::new(pane.min_width as f64, pane.min_height as f64),
            load_delay: Duration::from_millis(pane.load_delay_ms),
            not_ready_retry: Duration::from_millis(pane.not_ready_retry_ms),
            autosave_interval: Duration::from_secs(pane.autosave_interval_secs),
            cookie_save_delay: Duration::from_millis(pane.cookie_save_delay_ms),
            zoom_after_load: Duration::from_millis(pane.zoom_after_load_ms),
            zoom_after_mode_switch: Duration::from_millis(pane.zoom_after_mode_switch_ms),
            zoom_after_resize: Duration::from_millis(pane.zoom_after_resize_ms),
            reference_size: Size::new(pane.reference_width as f64, pane.reference_height as f64),
            auto_resolution: pane.auto_resolution,
            search_endpoint: pane.search_endpoint.clone(),
            blank_destination: pane.blank_destination.clone(),
            home_destination: pane.home_destination.clone(),
            reveal_delay: Duration::from_millis(controls.reveal_delay_ms),
            idle_hide: Duration::from_millis(controls.idle_hide_ms),
            hot_zone_height: controls.hot_zone_height as f64,
        }
    }
}

impl Default for PaneSettings {
    fn default() -> Self {
        Self::from_config(&PanegridConfig::default())
    }
}
