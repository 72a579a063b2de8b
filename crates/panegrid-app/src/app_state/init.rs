//! Window creation and pool construction.

use std::sync::Arc;
use std::time::Instant;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use panegrid_common::Rect;
use panegrid_store::{setting_or, COLUMNS_SETTING};
use panegrid_surface::bounds::grid_rect_to_wry;
use panegrid_surface::{RenderSurface, SurfaceConfig, WrySurface};
use panegrid_tiling::pool::MAX_COLUMNS;
use panegrid_tiling::{FullscreenCoordinator, GridGeometry, PanePool, PoolOptions};

use super::core::PanegridApp;
use super::types::EMPTY_STATE_HTML;

// =============================================================================
// INITIALIZATION
// =============================================================================

impl PanegridApp {
    /// Create the host window, one surface per pooled pane and the
    /// empty-state view. Returns `false` if the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let columns = self.stored_columns();
        let geometry = GridGeometry::from_config(&self.config.layout);
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.as_str())
            .with_inner_size(LogicalSize::new(
                geometry.required_window_width(columns),
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let surface_config = SurfaceConfig::default();
        let options = PoolOptions {
            columns,
            ..PoolOptions::from_config(&self.config)
        };
        let built = PanePool::try_new(
            options,
            self.store.clone(),
            self.bus.clone(),
            Instant::now(),
            |slot| {
                WrySurface::build(slot, window.as_ref(), Rect::default(), &surface_config)
                    .map(|surface| Box::new(surface) as Box<dyn RenderSurface>)
            },
        );
        let pool = match built {
            Ok(pool) => pool,
            Err(e) => {
                tracing::error!(error = %e, "failed to create pane surfaces");
                return false;
            }
        };

        self.empty_state = build_empty_state(&window);
        let screen = screen_rect(&window);
        self.install_pool(pool, screen, Instant::now());
        let inner = window.inner_size().to_logical::<f64>(window.scale_factor());
        if let Some(pool) = self.pool.as_mut() {
            pool.set_viewport_height(inner.height);
        }
        self.window = Some(window);
        tracing::info!(columns, "Window created and pane pool initialized");
        true
    }

    /// Take ownership of a constructed pool and set up the coordinator.
    pub(super) fn install_pool(&mut self, mut pool: PanePool, screen: Rect, now: Instant) {
        pool.set_screen(screen);
        self.fullscreen = Some(FullscreenCoordinator::new(
            &self.config.fullscreen,
            screen,
            now,
        ));
        self.pool = Some(pool);
    }

    /// Load this session's sub-windows from the store and assign them.
    pub(super) fn start_session(&mut self) {
        self.session_windows = match self.store.as_deref() {
            Some(store) => store.ordered_sub_windows().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "failed to read sub-windows, starting empty");
                Vec::new()
            }),
            None => Vec::new(),
        };
        tracing::info!(count = self.session_windows.len(), "starting session");
        self.reassign();
    }

    /// Re-read the session, restore every shown pane's saved state, and
    /// return to fullscreen on the same sub-window if it is still shown.
    pub(super) fn reload_session(&mut self) {
        let fullscreen_id = self
            .fullscreen
            .as_ref()
            .and_then(|f| f.active())
            .and_then(|slot| self.pool.as_ref()?.pane(slot)?.sub_window_id());
        self.exit_fullscreen();
        self.start_session();
        if let Some(pool) = self.pool.as_mut() {
            pool.load_all();
        }
        let target = fullscreen_id.and_then(|id| self.pool.as_ref()?.find_by_sub_window_id(id));
        if let Some(slot) = target {
            tracing::debug!(%slot, "restoring fullscreen after session reload");
            self.toggle_fullscreen(slot);
        }
    }

    /// Column count from the `windowColumns` setting, else the config default.
    pub(super) fn stored_columns(&self) -> u32 {
        let fallback = self.config.pool.default_columns;
        let columns = match self.store.as_deref() {
            Some(store) => setting_or(store, COLUMNS_SETTING, fallback),
            None => fallback,
        };
        if (1..=MAX_COLUMNS).contains(&columns) {
            columns
        } else {
            tracing::warn!(columns, "stored column count out of range, using default");
            fallback.clamp(1, MAX_COLUMNS)
        }
    }
}

/// Monitor bounds in logical pixels, else the window's own size.
fn screen_rect(window: &Window) -> Rect {
    if let Some(monitor) = window.current_monitor() {
        let size = monitor.size().to_logical::<f64>(monitor.scale_factor());
        return Rect::new(0.0, 0.0, size.width, size.height);
    }
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    Rect::new(0.0, 0.0, size.width, size.height)
}

fn build_empty_state(window: &Arc<Window>) -> Option<wry::WebView> {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    let bounds = Rect::new(0.0, 0.0, size.width, size.height);
    match wry::WebViewBuilder::new()
        .with_html(EMPTY_STATE_HTML)
        .with_bounds(grid_rect_to_wry(&bounds))
        .with_visible(false)
        .build_as_child(window.as_ref())
    {
        Ok(view) => Some(view),
        Err(e) => {
            tracing::warn!(error = %e, "failed to create empty-state view");
            None
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use panegrid_config::PanegridConfig;
    use panegrid_store::{MemoryStore, SessionStore, SharedStore, COLUMNS_SETTING};
    use serde_json::json;

    use super::super::test_support::{fake_app, window};
    use crate::app_state::core::PanegridApp;

    #[test]
    fn stored_columns_prefers_setting() {
        let store = Arc::new(MemoryStore::new());
        store.set_setting(COLUMNS_SETTING, json!(3)).unwrap();
        let shared: SharedStore = store;
        let app = PanegridApp::new(PanegridConfig::default(), Some(shared));
        assert_eq!(app.stored_columns(), 3);
    }

    #[test]
    fn stored_columns_rejects_out_of_range() {
        let store = Arc::new(MemoryStore::new());
        store.set_setting(COLUMNS_SETTING, json!(7)).unwrap();
        let shared: SharedStore = store;
        let app = PanegridApp::new(PanegridConfig::default(), Some(shared));
        assert_eq!(app.stored_columns(), 2);
    }

    #[test]
    fn stored_columns_without_store_uses_config() {
        let mut config = PanegridConfig::default();
        config.pool.default_columns = 1;
        let app = PanegridApp::new(config, None);
        assert_eq!(app.stored_columns(), 1);
    }

    #[test]
    fn start_session_assigns_store_windows() {
        let mut t = fake_app(6);
        t.store
            .set_sub_windows(vec![window(1, "https://a.test"), window(2, "https://b.test")]);
        t.app.start_session();

        let pool = t.app.pool.as_ref().unwrap();
        assert_eq!(pool.visible_count(), 2);
        assert_eq!(t.app.session_windows.len(), 2);
    }
}
