//! `wry` child-webview implementation of [`RenderSurface`].

mod handlers;
mod types;

use std::sync::{Arc, Mutex};

use panegrid_common::{Rect, SlotIndex, SurfaceError};
use tracing::debug;
use wry::raw_window_handle;
use wry::{WebView, WebViewBuilder};

use crate::bounds::grid_rect_to_wry;
use crate::controls::ControlsView;
use crate::events::{ScriptTicket, SurfaceEvent};
use crate::ipc::IPC_INIT_SCRIPT;
use crate::scripts;
use crate::RenderSurface;

use handlers::{decode_script_result, push, EventSink};

pub use types::SurfaceConfig;

fn engine(e: wry::Error) -> SurfaceError {
    SurfaceError::Engine(e.to_string())
}

/// One embedded webview, bound to a pool slot for its whole life.
pub struct WrySurface {
    webview: WebView,
    slot: SlotIndex,
    /// Event sink shared with the webview callbacks.
    events: EventSink,
    loading: bool,
    page_url: Option<String>,
}

impl WrySurface {
    /// Create a child webview of `window`, initially hidden.
    pub fn build<W: raw_window_handle::HasWindowHandle>(
        slot: SlotIndex,
        window: &W,
        bounds: Rect,
        config: &SurfaceConfig,
    ) -> Result<Self, SurfaceError> {
        let events: EventSink = Arc::new(Mutex::new(Vec::new()));

        let mut builder = WebViewBuilder::new()
            .with_bounds(grid_rect_to_wry(&bounds))
            .with_visible(false)
            .with_focused(false)
            .with_incognito(config.incognito)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_initialization_script(IPC_INIT_SCRIPT)
            .with_url(&config.initial_url);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = handlers::attach_ipc_handler(builder, Arc::clone(&events), slot);
        builder = handlers::attach_page_load_handler(builder, Arc::clone(&events), slot);
        builder = handlers::attach_title_handler(builder, Arc::clone(&events), slot);

        let webview = builder.build_as_child(window).map_err(engine)?;
        debug!(%slot, url = %config.initial_url, "surface created");

        Ok(Self {
            webview,
            slot,
            events,
            loading: false,
            page_url: None,
        })
    }

    pub fn slot(&self) -> SlotIndex {
        self.slot
    }

    fn eval(&self, script: &str) -> Result<(), SurfaceError> {
        self.webview.evaluate_script(script).map_err(engine)
    }
}

impl RenderSurface for WrySurface {
    fn is_ready(&self) -> bool {
        true
    }

    fn is_loading(&self) -> bool {
        self.loading
    }

    fn page_url(&self) -> Option<String> {
        self.page_url.clone()
    }

    fn load_url(&mut self, url: &str) -> Result<(), SurfaceError> {
        self.loading = true;
        self.webview.load_url(url).map_err(engine)
    }

    fn reload(&mut self) -> Result<(), SurfaceError> {
        self.eval(scripts::RELOAD_SCRIPT)
    }

    fn stop(&mut self) -> Result<(), SurfaceError> {
        self.eval(scripts::STOP_SCRIPT)
    }

    fn go_back(&mut self) -> Result<(), SurfaceError> {
        self.eval(scripts::GO_BACK_SCRIPT)
    }

    fn go_forward(&mut self) -> Result<(), SurfaceError> {
        self.eval(scripts::GO_FORWARD_SCRIPT)
    }

    fn run_script(
        &mut self,
        script: &str,
        ticket: Option<ScriptTicket>,
    ) -> Result<(), SurfaceError> {
        match ticket {
            None => self.eval(script),
            Some(ticket) => {
                let events = Arc::clone(&self.events);
                self.webview
                    .evaluate_script_with_callback(script, move |raw| {
                        push(
                            &events,
                            SurfaceEvent::ScriptResult {
                                ticket,
                                value: decode_script_result(&raw),
                            },
                        );
                    })
                    .map_err(engine)
            }
        }
    }

    fn set_zoom(&mut self, factor: f64) -> Result<(), SurfaceError> {
        self.webview.zoom(factor).map_err(engine)
    }

    fn set_bounds(&mut self, bounds: Rect) -> Result<(), SurfaceError> {
        self.webview
            .set_bounds(grid_rect_to_wry(&bounds))
            .map_err(engine)
    }

    fn set_visible(&mut self, visible: bool) -> Result<(), SurfaceError> {
        self.webview.set_visible(visible).map_err(engine)
    }

    fn clear_cookie_store(&mut self) -> Result<(), SurfaceError> {
        self.webview.clear_all_browsing_data().map_err(engine)
    }

    fn present_controls(&mut self, view: &ControlsView) -> Result<(), SurfaceError> {
        self.eval(&scripts::render_controls_script(view))
    }

    fn drain_events(&mut self) -> Vec<SurfaceEvent> {
        let drained = match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        };
        for event in &drained {
            match event {
                SurfaceEvent::LoadStarted => self.loading = true,
                SurfaceEvent::LoadFinished { .. } => self.loading = false,
                SurfaceEvent::UrlChanged(url) => self.page_url = Some(url.clone()),
                _ => {}
            }
        }
        drained
    }
}
