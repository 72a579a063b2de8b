//! Presentation mode, floating controls, geometry and zoom.

use panegrid_common::{Rect, Size};
use panegrid_surface::ControlsView;
use tracing::debug;

use super::types::{Pane, PaneTimer, SizeConstraints};
use crate::zoom::{differs_noticeably, optimal_zoom_factor};

const NAME_PLACEHOLDER: &str = "Sub-window";

// Button offsets from the pane's right edge.
const TOGGLE_OFFSET: f64 = 35.0;
const NORMAL_REFRESH_OFFSET: f64 = 70.0;
const FULLSCREEN_REFRESH_OFFSET: f64 = 65.0;
const NORMAL_BUTTON_TOP: f64 = 5.0;
const FULLSCREEN_BUTTON_TOP: f64 = 15.0;

impl Pane {
    pub fn set_name(&mut self, name: &str) {
        if self.name == name {
            return;
        }
        self.name = name.to_string();
        self.present_controls();
    }

    /// Switch between grid presentation and fullscreen presentation.
    pub fn set_fullscreen_mode(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
        if fullscreen {
            self.constraints = SizeConstraints::Unconstrained;
            self.controls_shown = false;
        } else {
            self.constraints = SizeConstraints::Bounded {
                min: self.settings.min_size,
            };
            self.timers.cancel(&PaneTimer::RevealControls);
            self.timers.cancel(&PaneTimer::HideControls);
            self.controls_shown = true;
        }
        debug!(slot = %self.slot, fullscreen, "presentation mode changed");
        self.present_controls();
        if self.settings.auto_resolution {
            self.arm(PaneTimer::Zoom, self.settings.zoom_after_mode_switch);
        }
    }

    /// Grid size policy for the current column count.
    pub fn apply_size_policy(&mut self, size: Size) {
        self.constraints = SizeConstraints::Fixed(size);
    }

    pub fn set_geometry(&mut self, bounds: Rect) {
        if self.bounds == bounds {
            return;
        }
        self.bounds = bounds;
        self.surface_call("set_bounds", |s| s.set_bounds(bounds));
        self.present_controls();
        if self.settings.auto_resolution {
            self.arm(PaneTimer::Zoom, self.settings.zoom_after_resize);
        }
    }

    /// Physical screen size, used by the fullscreen zoom blend.
    pub fn set_screen_size(&mut self, screen: Size) {
        self.screen = Some(screen);
    }

    /// Pointer position inside the page while fullscreen drives the
    /// reveal and idle-hide timers.
    pub fn pointer_moved(&mut self, y: f64) {
        if !self.fullscreen {
            return;
        }
        if y <= self.settings.hot_zone_height {
            if !self.controls_shown {
                self.arm(PaneTimer::RevealControls, self.settings.reveal_delay);
            }
            self.arm(PaneTimer::HideControls, self.settings.idle_hide);
        } else {
            if self.controls_shown {
                self.arm(PaneTimer::HideControls, self.settings.idle_hide);
            }
            self.timers.cancel(&PaneTimer::RevealControls);
        }
    }

    pub(super) fn reveal_controls(&mut self) {
        if !self.fullscreen || self.controls_shown {
            return;
        }
        self.controls_shown = true;
        self.present_controls();
        self.arm(PaneTimer::HideControls, self.settings.idle_hide);
    }

    pub(super) fn hide_controls(&mut self) {
        if !self.fullscreen || !self.controls_shown {
            return;
        }
        self.controls_shown = false;
        self.present_controls();
    }

    pub fn controls_view(&self) -> ControlsView {
        let width = self.bounds.width;
        let (refresh_offset, top) = if self.fullscreen {
            (FULLSCREEN_REFRESH_OFFSET, FULLSCREEN_BUTTON_TOP)
        } else {
            (NORMAL_REFRESH_OFFSET, NORMAL_BUTTON_TOP)
        };
        ControlsView {
            visible: self.controls_shown,
            fullscreen: self.fullscreen,
            toggle_label: if self.fullscreen { "✕" } else { "⛶" }.to_string(),
            toggle_x: (width - TOGGLE_OFFSET).max(0.0),
            toggle_y: top,
            refresh_x: (width - refresh_offset).max(0.0),
            refresh_y: top,
            name: if self.name.is_empty() {
                NAME_PLACEHOLDER.to_string()
            } else {
                self.name.clone()
            },
            name_visible: !self.fullscreen,
            status: self.status.clone(),
            status_visible: !self.fullscreen,
            progress: self.progress,
        }
    }

    /// Send the overlay state to the surface if it changed.
    pub(super) fn present_controls(&mut self) {
        let view = self.controls_view();
        if self.last_controls.as_ref() == Some(&view) {
            return;
        }
        if self.surface_call("present_controls", |s| s.present_controls(&view)) {
            self.last_controls = Some(view);
        }
    }

    pub(super) fn set_status(&mut self, status: String, progress: Option<u8>) {
        self.status = status;
        self.progress = progress;
        self.present_controls();
    }

    /// Fired by [`PaneTimer::Zoom`].
    pub(super) fn update_zoom(&mut self) {
        if !self.settings.auto_resolution {
            return;
        }
        let factor = optimal_zoom_factor(
            self.bounds.size(),
            self.settings.reference_size,
            self.fullscreen,
            self.screen,
        );
        if !differs_noticeably(self.zoom_factor, factor) {
            return;
        }
        if self.surface_call("set_zoom", |s| s.set_zoom(factor)) {
            debug!(slot = %self.slot, zoom = factor, "zoom factor applied");
            self.zoom_factor = factor;
        }
    }
}
