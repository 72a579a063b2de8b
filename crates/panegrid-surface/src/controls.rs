use serde::Serialize;

/// Everything the floating controls overlay needs to draw itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlsView {
    /// Controls shown (always true outside fullscreen).
    pub visible: bool,
    pub fullscreen: bool,
    pub toggle_label: String,
    pub toggle_x: f64,
    pub toggle_y: f64,
    pub refresh_x: f64,
    pub refresh_y: f64,
    pub name: String,
    pub name_visible: bool,
    pub status: String,
    pub status_visible: bool,
    /// Progress bar value while loading.
    pub progress: Option<u8>,
}

impl Default for ControlsView {
    fn default() -> Self {
        Self {
            visible: true,
            fullscreen: false,
            toggle_label: "⛶".into(),
            toggle_x: 0.0,
            toggle_y: 5.0,
            refresh_x: 0.0,
            refresh_y: 5.0,
            name: String::new(),
            name_visible: true,
            status: String::new(),
            status_visible: true,
            progress: None,
        }
    }
}
