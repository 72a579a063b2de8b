//! Headless app fixture: a pool of recording surfaces and an in-memory store.

use std::sync::Arc;
use std::time::{Duration, Instant};

use panegrid_common::{LogicalSubWindow, Rect, SlotIndex, SubWindowId};
use panegrid_config::PanegridConfig;
use panegrid_store::{MemoryStore, SharedStore};
use panegrid_surface::fake::{FakeHandle, FakeSurface};
use panegrid_surface::{ControlSignal, SurfaceEvent};
use panegrid_tiling::{PanePool, PoolOptions};

use super::core::PanegridApp;

pub(super) const SCREEN: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 1600.0,
    height: 1000.0,
};

pub(super) struct TestApp {
    pub(super) app: PanegridApp,
    pub(super) surfaces: Vec<FakeHandle>,
    pub(super) store: Arc<MemoryStore>,
    pub(super) t0: Instant,
}

pub(super) fn window(id: u32, url: &str) -> LogicalSubWindow {
    LogicalSubWindow::new(SubWindowId(id), format!("Window {id}"), url)
}

pub(super) fn fake_app(size: usize) -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let shared: SharedStore = store.clone();
    let mut app = PanegridApp::new(PanegridConfig::default(), Some(shared.clone()));
    let t0 = Instant::now();
    let mut surfaces = Vec::new();
    let options = PoolOptions {
        size,
        ..PoolOptions::from_config(&app.config)
    };
    let pool = PanePool::new(options, Some(shared), app.bus.clone(), t0, |_| {
        let (surface, handle) = FakeSurface::new();
        surfaces.push(handle);
        Box::new(surface)
    });
    app.install_pool(pool, SCREEN, t0);
    TestApp {
        app,
        surfaces,
        store,
        t0,
    }
}

impl TestApp {
    pub(super) fn with_windows(size: usize, count: u32) -> Self {
        let mut t = fake_app(size);
        t.app.session_windows = (1..=count)
            .map(|i| window(i, &format!("https://{i}.test")))
            .collect();
        t.app.reassign();
        t
    }

    /// Run one host tick `offset_ms` after construction.
    pub(super) fn at(&mut self, offset_ms: u64) {
        self.app.tick(self.t0 + Duration::from_millis(offset_ms));
    }

    pub(super) fn signal(&self, slot: u32, signal: ControlSignal) {
        self.surfaces[SlotIndex(slot).position()].push_event(SurfaceEvent::Control(signal));
    }

    pub(super) fn active_fullscreen(&self) -> Option<SlotIndex> {
        self.app.fullscreen.as_ref().and_then(|fs| fs.active())
    }

    pub(super) fn session_ids(&self) -> Vec<u32> {
        self.app.session_windows.iter().map(|w| w.id.0).collect()
    }
}
