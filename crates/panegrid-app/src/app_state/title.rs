//! Window title management: reflects what the grid is showing.

use super::core::PanegridApp;

// =============================================================================
// WINDOW TITLE
// =============================================================================

impl PanegridApp {
    /// Format: "{title} — N windows", or "{title} — {name}" while a pane is
    /// fullscreen.
    pub(super) fn window_title(&self) -> String {
        let base = &self.config.window.title;
        let Some(pool) = &self.pool else {
            return base.clone();
        };

        if let Some(slot) = self.fullscreen.as_ref().and_then(|f| f.active()) {
            if let Some(pane) = pool.pane(slot) {
                let label = if pane.title().is_empty() {
                    pane.name()
                } else {
                    pane.title()
                };
                if !label.is_empty() {
                    return format!("{base} — {label}");
                }
            }
        }

        match pool.visible_count() {
            0 => base.clone(),
            1 => format!("{base} — 1 window"),
            n => format!("{base} — {n} windows"),
        }
    }

    pub(super) fn update_window_title(&self) {
        let Some(ref window) = self.window else {
            return;
        };
        window.set_title(&self.window_title());
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use panegrid_config::PanegridConfig;
    use panegrid_surface::ControlSignal;

    use super::super::test_support::TestApp;
    use crate::app_state::core::PanegridApp;

    #[test]
    fn update_title_without_window_does_not_panic() {
        let app = PanegridApp::new(PanegridConfig::default(), None);

        // window is None on a fresh app, should silently return
        app.update_window_title();
        assert_eq!(app.window_title(), "PaneGrid");
    }

    #[test]
    fn title_counts_visible_windows() {
        let t = TestApp::with_windows(6, 3);
        assert_eq!(t.app.window_title(), "PaneGrid — 3 windows");

        let t = TestApp::with_windows(6, 1);
        assert_eq!(t.app.window_title(), "PaneGrid — 1 window");
    }

    #[test]
    fn title_names_fullscreen_pane() {
        let mut t = TestApp::with_windows(6, 3);
        t.signal(2, ControlSignal::ToggleFullscreen);
        t.at(10);
        assert_eq!(t.app.window_title(), "PaneGrid — Window 2");
    }
}
