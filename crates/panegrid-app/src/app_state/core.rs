//! PanegridApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::broadcast;
use winit::window::Window;

use panegrid_common::{EventBus, LogicalSubWindow, PoolEvent};
use panegrid_config::PanegridConfig;
use panegrid_store::SharedStore;
use panegrid_tiling::{FullscreenCoordinator, PanePool};

use super::types::EVENT_CAPACITY;

/// Top-level application state.
pub struct PanegridApp {
    pub(super) config: PanegridConfig,
    pub(super) store: Option<SharedStore>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) empty_state: Option<wry::WebView>,

    // Panes
    pub(super) bus: EventBus,
    pub(super) events: broadcast::Receiver<PoolEvent>,
    pub(super) pool: Option<PanePool>,
    pub(super) fullscreen: Option<FullscreenCoordinator>,
    /// Sub-windows shown this session, in grid order.
    pub(super) session_windows: Vec<LogicalSubWindow>,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    pub(super) should_exit: bool,
    pub(super) shut_down: bool,
    pub(super) last_poll: Instant,
}

impl PanegridApp {
    pub fn new(config: PanegridConfig, store: Option<SharedStore>) -> Self {
        let bus = EventBus::new(EVENT_CAPACITY);
        let events = bus.subscribe();
        Self {
            config,
            store,
            window: None,
            empty_state: None,
            bus,
            events,
            pool: None,
            fullscreen: None,
            session_windows: Vec::new(),
            modifiers: winit::keyboard::ModifiersState::empty(),
            should_exit: false,
            shut_down: false,
            last_poll: Instant::now(),
        }
    }
}
