//! Grid changes driven by the host: reassignment, column changes and the
//! empty-state view.

use winit::dpi::LogicalSize;

use super::core::PanegridApp;

impl PanegridApp {
    /// Re-run assignment with the current session sub-windows.
    pub(super) fn reassign(&mut self) {
        let Some(pool) = self.pool.as_mut() else {
            return;
        };
        if let Err(e) = pool.assign_logical_windows(&self.session_windows) {
            tracing::warn!(error = %e, "assignment rejected");
        }
        self.update_empty_state();
        self.update_window_title();
    }

    /// Change the grid column count and widen or narrow the host window.
    pub(super) fn apply_columns(&mut self, columns: u32) {
        self.exit_fullscreen();
        let Some(pool) = self.pool.as_mut() else {
            return;
        };
        match pool.set_column_count(columns) {
            Ok(true) => {}
            Ok(false) => return,
            Err(e) => {
                tracing::warn!(columns, error = %e, "column change rejected");
                return;
            }
        }
        let width = pool.geometry().required_window_width(columns);
        tracing::info!(columns, width, "grid columns changed");
        if let Some(window) = &self.window {
            let height = window
                .inner_size()
                .to_logical::<f64>(window.scale_factor())
                .height;
            let _ = window.request_inner_size(LogicalSize::new(width, height));
        }
    }

    /// Show the empty-state view only while there is nothing to display.
    pub(super) fn update_empty_state(&mut self) {
        let empty = self.session_windows.is_empty();
        if let Some(view) = &self.empty_state {
            if let Err(e) = view.set_visible(empty) {
                tracing::warn!(error = %e, "failed to toggle empty-state view");
            }
        }
    }

    pub(super) fn resize_empty_state(&mut self, width: f64, height: f64) {
        let Some(view) = &self.empty_state else {
            return;
        };
        let bounds = panegrid_common::Rect::new(0.0, 0.0, width, height);
        if let Err(e) = view.set_bounds(panegrid_surface::bounds::grid_rect_to_wry(&bounds)) {
            tracing::warn!(error = %e, "failed to resize empty-state view");
        }
    }
}
