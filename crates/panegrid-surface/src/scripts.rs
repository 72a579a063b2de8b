//! Page scripts the wry surface uses for commands wry has no native call for.

use crate::controls::ControlsView;

pub const GO_BACK_SCRIPT: &str = "window.history.back();";
pub const GO_FORWARD_SCRIPT: &str = "window.history.forward();";
pub const STOP_SCRIPT: &str = "window.stop();";
pub const RELOAD_SCRIPT: &str = "window.location.reload();";

/// Script that redraws the controls overlay with `view`.
pub fn render_controls_script(view: &ControlsView) -> String {
    let json = serde_json::to_string(view).unwrap_or_else(|_| "null".to_string());
    format!("window.__panegrid && window.__panegrid.render({json});")
}
