//! Pane, controls and fullscreen timing validation.

use crate::schema::PanegridConfig;

use super::helpers::{check_http_url, check_not_blank, check_range};

pub(crate) fn validate_pane(errors: &mut Vec<String>, config: &PanegridConfig) {
    let pane = &config.pane;
    check_range(errors, "pane.min_width", pane.min_width, 100..=1920);
    check_range(errors, "pane.min_height", pane.min_height, 100..=1080);
    check_range(errors, "pane.load_delay_ms", pane.load_delay_ms, 0..=10_000);
    check_range(errors, "pane.not_ready_retry_ms", pane.not_ready_retry_ms, 10..=5_000);
    check_range(errors, "pane.autosave_interval_secs", pane.autosave_interval_secs, 5..=3600);
    check_range(errors, "pane.cookie_save_delay_ms", pane.cookie_save_delay_ms, 0..=60_000);
    check_range(errors, "pane.reference_width", pane.reference_width, 640..=7680);
    check_range(errors, "pane.reference_height", pane.reference_height, 480..=4320);

    check_http_url(errors, "pane.search_endpoint", &pane.search_endpoint);
    check_not_blank(errors, "pane.blank_destination", &pane.blank_destination);
}

pub(crate) fn validate_controls(errors: &mut Vec<String>, config: &PanegridConfig) {
    let controls = &config.controls;
    check_range(errors, "controls.reveal_delay_ms", controls.reveal_delay_ms, 0..=5_000);
    check_range(errors, "controls.idle_hide_ms", controls.idle_hide_ms, 250..=60_000);
    check_range(errors, "controls.hot_zone_height", controls.hot_zone_height, 10..=200);
}

pub(crate) fn validate_fullscreen(errors: &mut Vec<String>, config: &PanegridConfig) {
    check_range(errors, "fullscreen.enter_settle_ms", config.fullscreen.enter_settle_ms, 0..=2_000);
    check_range(errors, "fullscreen.exit_settle_ms", config.fullscreen.exit_settle_ms, 0..=2_000);
}
