//! Fullscreen round-trip tests.

use std::sync::Arc;
use std::time::{Duration, Instant};

use panegrid_common::{EventBus, LogicalSubWindow, Rect, Size, SlotIndex, SubWindowId};
use panegrid_config::schema::FullscreenConfig;
use panegrid_pane::SizeConstraints;
use panegrid_store::{MemoryStore, SessionStore, SharedStore};
use panegrid_surface::fake::{FakeHandle, FakeSurface};

use super::*;
use crate::pool::{PanePool, PoolOptions, Stage};

const SID_BLOB: &str = r#"[{"name":"sid","value":"abc","domain":"a.test","path":"/"}]"#;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn screen() -> Rect {
    Rect::new(0.0, 0.0, 1920.0, 1080.0)
}

struct Harness {
    pool: PanePool,
    coordinator: FullscreenCoordinator,
    surfaces: Vec<FakeHandle>,
    store: Arc<MemoryStore>,
    t0: Instant,
}

impl Harness {
    /// Four panes in two columns bound to ids 1-4, loads settled.
    fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let shared: SharedStore = store.clone();
        let t0 = Instant::now();
        let mut surfaces = Vec::new();
        let options = PoolOptions {
            size: 6,
            ..PoolOptions::default()
        };
        let mut pool = PanePool::new(options, Some(shared), EventBus::default(), t0, |_| {
            let (surface, handle) = FakeSurface::new();
            surfaces.push(handle);
            Box::new(surface)
        });
        let windows: Vec<LogicalSubWindow> = (1..=4)
            .map(|id| {
                LogicalSubWindow::new(SubWindowId(id), format!("W{id}"), format!("https://w{id}.test"))
            })
            .collect();
        pool.assign_logical_windows(&windows).unwrap();
        let coordinator = FullscreenCoordinator::new(&FullscreenConfig::default(), screen(), t0);

        let mut h = Self {
            pool,
            coordinator,
            surfaces,
            store,
            t0,
        };
        h.at(500);
        for (n, handle) in h.surfaces.iter().take(4).enumerate() {
            handle.finish_load(&format!("https://w{}.test/", n + 1), true);
        }
        h.at(600);
        h
    }

    fn at(&mut self, offset_ms: u64) {
        let now = self.t0 + ms(offset_ms);
        self.pool.poll(now);
        self.coordinator.poll(now, &mut self.pool);
    }

    fn request(&mut self, n: u32) {
        self.coordinator.request(SlotIndex(n), &mut self.pool);
    }

    fn constraints(&self, n: u32) -> SizeConstraints {
        self.pool.pane(SlotIndex(n)).unwrap().constraints()
    }

    fn fullscreen_panes(&self) -> usize {
        self.pool.panes().filter(|p| p.is_fullscreen()).count()
    }
}

#[test]
fn round_trip_restores_position_and_constraints() {
    let mut h = Harness::new();
    let grid_rect = h.pool.pane(SlotIndex(3)).unwrap().bounds();
    let original = h.constraints(3);
    assert_eq!(original, SizeConstraints::Fixed(Size::new(500.0, 300.0)));

    h.request(3);
    assert_eq!(
        h.coordinator.state(),
        FullscreenState::Fullscreen {
            slot: SlotIndex(3),
            original_position: 2
        }
    );
    assert_eq!(h.pool.stage(), Stage::Fullscreen(SlotIndex(3)));
    assert_eq!(h.constraints(3), SizeConstraints::Unconstrained);

    h.at(700);
    assert_eq!(h.pool.pane(SlotIndex(3)).unwrap().bounds(), screen());

    h.request(3);
    assert_eq!(h.coordinator.state(), FullscreenState::Normal);
    assert_eq!(h.pool.position_of(SlotIndex(3)), Some(2));
    assert_eq!(h.pool.stage(), Stage::Grid);
    assert_eq!(h.pool.pane(SlotIndex(3)).unwrap().bounds(), grid_rect);

    h.at(760);
    assert_eq!(h.constraints(3), original);
    assert_eq!(h.fullscreen_panes(), 0);
}

#[test]
fn grid_is_hidden_while_fullscreen() {
    let mut h = Harness::new();
    h.request(2);
    let visible: Vec<SlotIndex> = h
        .pool
        .panes()
        .filter(|p| p.is_visible())
        .map(|p| p.slot())
        .collect();
    assert_eq!(visible, vec![SlotIndex(2)]);

    h.request(2);
    assert_eq!(h.pool.panes().filter(|p| p.is_visible()).count(), 4);
}

#[test]
fn second_request_from_another_pane_exits() {
    let mut h = Harness::new();
    h.request(1);
    assert_eq!(h.fullscreen_panes(), 1);

    h.request(4);
    assert_eq!(h.coordinator.state(), FullscreenState::Normal);
    assert_eq!(h.fullscreen_panes(), 0);
    assert_eq!(h.pool.position_of(SlotIndex(1)), Some(0));
    assert!(!h.pool.pane(SlotIndex(4)).unwrap().is_fullscreen());
}

#[test]
fn never_two_panes_fullscreen() {
    let mut h = Harness::new();
    let mut t = 700;
    for n in [1, 2, 3, 4, 2, 1] {
        h.request(n);
        assert!(h.fullscreen_panes() <= 1);
        t += 10;
        h.at(t);
        assert!(h.fullscreen_panes() <= 1);
    }
    let order: Vec<SlotIndex> = h.pool.rows().iter().flatten().copied().collect();
    assert_eq!(order, (1..=4).map(SlotIndex).collect::<Vec<_>>());

    h.at(t + 100);
    for n in 1..=4 {
        assert_eq!(h.constraints(n), SizeConstraints::Fixed(Size::new(500.0, 300.0)));
    }
}

#[test]
fn exit_before_enter_settle_skips_screen_sizing() {
    let mut h = Harness::new();
    let grid_rect = h.pool.pane(SlotIndex(2)).unwrap().bounds();
    h.request(2);
    h.at(650);
    h.request(2);
    h.at(800);
    assert_eq!(h.pool.pane(SlotIndex(2)).unwrap().bounds(), grid_rect);
    assert_eq!(
        h.constraints(2),
        SizeConstraints::Fixed(Size::new(500.0, 300.0))
    );
}

#[test]
fn entering_saves_cookies_and_exiting_reloads_them() {
    let mut h = Harness::new();
    let handle = h.surfaces[0].clone();
    handle.clear_commands();

    h.request(1);
    let ticket = handle
        .ticket_for("JSON.stringify")
        .expect("cookie extraction on enter");
    handle.complete_script(ticket, SID_BLOB);
    h.at(700);
    assert_eq!(
        h.store.cookie_blob(SubWindowId(1)).unwrap().as_deref(),
        Some(SID_BLOB)
    );

    handle.clear_commands();
    h.request(1);
    let injected = handle
        .scripts()
        .into_iter()
        .any(|(script, ticket)| ticket.is_none() && script.contains("sid=abc"));
    assert!(injected, "stored cookies are injected on exit");
}

#[test]
fn request_for_unplaced_pane_is_ignored() {
    let mut h = Harness::new();
    h.request(6);
    assert_eq!(h.coordinator.state(), FullscreenState::Normal);
    assert_eq!(h.pool.stage(), Stage::Grid);
}

#[test]
fn exit_if_active_only_acts_in_fullscreen() {
    let mut h = Harness::new();
    h.coordinator.exit_if_active(&mut h.pool);
    assert_eq!(h.coordinator.state(), FullscreenState::Normal);

    h.request(2);
    h.coordinator.exit_if_active(&mut h.pool);
    assert!(!h.coordinator.is_fullscreen());
    assert_eq!(h.pool.position_of(SlotIndex(2)), Some(1));
}

#[test]
fn screen_change_resizes_settled_fullscreen_pane() {
    let mut h = Harness::new();
    h.request(1);
    h.at(700);
    let smaller = Rect::new(0.0, 0.0, 1280.0, 720.0);
    h.coordinator.set_screen(smaller, &mut h.pool);
    assert_eq!(h.pool.pane(SlotIndex(1)).unwrap().bounds(), smaller);
}
