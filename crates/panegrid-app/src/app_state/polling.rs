//! Pool polling and routing of pool events to the host.

use std::time::Instant;

use tokio::sync::broadcast::error::TryRecvError;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::Fullscreen;

use panegrid_common::{PaneEvent, PoolEvent, SlotIndex};

use super::core::PanegridApp;
use super::types::POLL_INTERVAL;

impl PanegridApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.tick(now);
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_wake(Instant::now())));
    }

    /// Fire due pane, pool and fullscreen steps, then handle what they published.
    pub(super) fn tick(&mut self, now: Instant) {
        if let Some(pool) = self.pool.as_mut() {
            pool.poll(now);
            if let Some(fullscreen) = self.fullscreen.as_mut() {
                fullscreen.poll(now, pool);
            }
        }
        self.drain_pool_events();
    }

    /// Earliest of the next poll and any pending deadline.
    pub(super) fn next_wake(&self, now: Instant) -> Instant {
        let deadlines = [
            self.pool.as_ref().and_then(|p| p.next_deadline()),
            self.fullscreen.as_ref().and_then(|f| f.next_deadline()),
        ];
        deadlines
            .into_iter()
            .flatten()
            .fold(now + POLL_INTERVAL, |wake, deadline| wake.min(deadline.max(now)))
    }

    fn drain_pool_events(&mut self) {
        loop {
            match self.events.try_recv() {
                Ok(event) => self.handle_pool_event(event),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "pool events dropped");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
    }

    fn handle_pool_event(&mut self, event: PoolEvent) {
        match event {
            PoolEvent::FullscreenRequested(slot) => self.toggle_fullscreen(slot),
            PoolEvent::CloseRequested(slot) => self.close_slot(slot),
            PoolEvent::LayoutChanged(_) | PoolEvent::AllPanesReady => self.update_window_title(),
            PoolEvent::Pane {
                event: PaneEvent::TitleChanged(_) | PaneEvent::DestinationChanged(_),
                ..
            } => self.update_window_title(),
            PoolEvent::Pane {
                slot,
                event: PaneEvent::LoadFinished(false),
            } => {
                tracing::debug!(%slot, "pane load failed");
            }
            _ => {}
        }
    }

    pub(super) fn toggle_fullscreen(&mut self, slot: SlotIndex) {
        let (Some(pool), Some(fullscreen)) = (self.pool.as_mut(), self.fullscreen.as_mut()) else {
            return;
        };
        fullscreen.request(slot, pool);
        let active = fullscreen.is_fullscreen();
        self.sync_window_fullscreen(active);
        self.update_window_title();
    }

    /// Leave fullscreen from a host-level shortcut.
    pub(super) fn exit_fullscreen(&mut self) {
        let (Some(pool), Some(fullscreen)) = (self.pool.as_mut(), self.fullscreen.as_mut()) else {
            return;
        };
        if !fullscreen.is_fullscreen() {
            return;
        }
        fullscreen.exit_if_active(pool);
        self.sync_window_fullscreen(false);
        self.update_window_title();
    }

    /// Drop the sub-window shown in `slot` from this session and reassign.
    /// The store keeps the sub-window; it returns on the next start.
    fn close_slot(&mut self, slot: SlotIndex) {
        let Some(id) = self
            .pool
            .as_ref()
            .and_then(|pool| pool.pane(slot))
            .and_then(|pane| pane.sub_window_id())
        else {
            tracing::debug!(%slot, "close requested on unassigned pane");
            return;
        };
        if self.fullscreen.as_ref().and_then(|f| f.active()) == Some(slot) {
            self.exit_fullscreen();
        }
        self.session_windows.retain(|w| w.id != id);
        tracing::info!(%slot, sub_window_id = %id, "closing sub-window for this session");
        self.reassign();
    }

    fn sync_window_fullscreen(&self, active: bool) {
        if let Some(window) = &self.window {
            window.set_fullscreen(active.then_some(Fullscreen::Borderless(None)));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use panegrid_common::SlotIndex;
    use panegrid_surface::ControlSignal;

    use super::super::test_support::{fake_app, TestApp};

    #[test]
    fn toggle_signal_enters_and_escape_exits() {
        let mut t = TestApp::with_windows(6, 3);

        t.signal(2, ControlSignal::ToggleFullscreen);
        t.at(10);
        assert_eq!(t.active_fullscreen(), Some(SlotIndex(2)));

        t.signal(2, ControlSignal::Escape);
        t.at(20);
        assert_eq!(t.active_fullscreen(), None);
        let pool = t.app.pool.as_ref().unwrap();
        assert_eq!(pool.position_of(SlotIndex(2)), Some(1));
    }

    #[test]
    fn escape_outside_fullscreen_is_ignored() {
        let mut t = TestApp::with_windows(6, 3);
        t.signal(1, ControlSignal::Escape);
        t.at(10);
        assert_eq!(t.active_fullscreen(), None);
    }

    #[test]
    fn close_request_drops_window_and_reassigns() {
        let mut t = TestApp::with_windows(6, 3);

        t.signal(1, ControlSignal::Close);
        t.at(10);

        assert_eq!(t.session_ids(), vec![2, 3]);
        let pool = t.app.pool.as_ref().unwrap();
        assert_eq!(pool.visible_count(), 2);
        assert_eq!(
            pool.pane(SlotIndex(1)).and_then(|p| p.sub_window_id()).map(|id| id.0),
            Some(2)
        );
    }

    #[test]
    fn close_request_while_fullscreen_exits_first() {
        let mut t = TestApp::with_windows(6, 3);
        t.signal(3, ControlSignal::ToggleFullscreen);
        t.at(10);
        assert_eq!(t.active_fullscreen(), Some(SlotIndex(3)));

        t.signal(3, ControlSignal::Close);
        t.at(20);

        assert_eq!(t.active_fullscreen(), None);
        assert_eq!(t.session_ids(), vec![1, 2]);
        assert_eq!(t.app.pool.as_ref().unwrap().detached(), None);
    }

    #[test]
    fn close_on_unassigned_pane_is_ignored() {
        let mut t = TestApp::with_windows(6, 2);
        t.signal(5, ControlSignal::Close);
        t.at(10);
        assert_eq!(t.session_ids(), vec![1, 2]);
    }

    #[test]
    fn next_wake_never_exceeds_poll_interval() {
        let t = fake_app(2);
        let now = t.t0 + Duration::from_millis(5);
        let wake = t.app.next_wake(now);
        assert!(wake <= now + Duration::from_millis(8));
        assert!(wake >= now);
    }
}
