//! Identity binding, destination dispatch and passthrough navigation.

use panegrid_common::{SubWindowId, SurfaceError};
use panegrid_surface::RenderSurface;
use tracing::{debug, info, warn};

use super::types::{LoadState, Pane, PaneTimer};
use crate::destination::normalize_destination;

impl Pane {
    /// Bind the pane to a logical sub-window and stage its saved cookies.
    ///
    /// Ids below 1 leave the pane untouched.
    pub fn set_logical_identity(&mut self, raw_id: i64) {
        let Some(id) = SubWindowId::new(raw_id) else {
            debug!(slot = %self.slot, raw_id, "ignoring invalid sub-window id");
            return;
        };
        if self.sub_window_id == Some(id) {
            return;
        }
        info!(slot = %self.slot, sub_window_id = %id, "pane bound to sub-window");
        self.sub_window_id = Some(id);
        self.pending_cookies = None;
        self.timers.cancel(&PaneTimer::CookieSave);
        self.load_cookies();
    }

    /// Request a destination. Returns `true` when a new load was scheduled
    /// or deferred, `false` when the call was a no-op.
    pub fn set_destination(&mut self, input: &str) -> bool {
        let normalized = normalize_destination(
            input,
            &self.settings.search_endpoint,
            &self.settings.blank_destination,
        );
        let settled = !matches!(self.load_state, LoadState::Idle | LoadState::Failed);
        if settled && normalized == self.destination {
            return false;
        }
        debug!(slot = %self.slot, url = %normalized, "destination set");
        self.destination = normalized;
        self.schedule_dispatch();
        true
    }

    /// Show or hide the pane's surface. Showing replays a deferred load once.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        self.surface_call("set_visible", |s| s.set_visible(visible));
        if visible && self.load_state == LoadState::Deferred {
            debug!(slot = %self.slot, url = %self.destination, "replaying deferred load");
            self.load_state = LoadState::Scheduled;
            self.arm(PaneTimer::Dispatch, self.settings.load_delay);
        }
    }

    /// Mark whether the pool still counts this pane as shown. A pane left
    /// outside may still carry an id another slot now shows, so leaving
    /// drops its cookie saves and it requests none until it returns.
    pub fn set_in_layout(&mut self, in_layout: bool) {
        if self.in_layout == in_layout {
            return;
        }
        self.in_layout = in_layout;
        if !in_layout {
            debug!(slot = %self.slot, sub_window_id = ?self.sub_window_id, "pane left the layout");
            self.drop_cookie_saves();
        }
    }

    fn schedule_dispatch(&mut self) {
        if !self.visible {
            self.timers.cancel(&PaneTimer::Dispatch);
            self.load_state = LoadState::Deferred;
            return;
        }
        self.load_state = LoadState::Scheduled;
        self.arm(PaneTimer::Dispatch, self.settings.load_delay);
    }

    /// Fired by [`PaneTimer::Dispatch`].
    pub(super) fn dispatch(&mut self) {
        if !self.visible {
            self.load_state = LoadState::Deferred;
            return;
        }
        if !self.surface.is_ready() {
            debug!(slot = %self.slot, "surface not ready, retrying dispatch");
            self.arm(PaneTimer::Dispatch, self.settings.not_ready_retry);
            return;
        }
        match self.surface.load_url(&self.destination) {
            Ok(()) => {
                self.dispatch_generation += 1;
                self.load_state = LoadState::Dispatched;
                self.bind_pending_cookies();
                info!(slot = %self.slot, url = %self.destination, "load dispatched");
            }
            Err(SurfaceError::NotReady) => {
                self.arm(PaneTimer::Dispatch, self.settings.not_ready_retry);
            }
            Err(e) => {
                warn!(slot = %self.slot, url = %self.destination, error = %e, "load failed to start");
                self.load_state = LoadState::Failed;
            }
        }
    }

    /// Tie an unbound pending cookie script to the load just dispatched,
    /// dropping one that was waiting on an earlier load.
    fn bind_pending_cookies(&mut self) {
        let generation = self.dispatch_generation;
        let stale = match self.pending_cookies.as_mut() {
            Some(pending) if pending.bound_dispatch.is_none() => {
                pending.bound_dispatch = Some(generation);
                false
            }
            Some(pending) => pending.bound_dispatch != Some(generation),
            None => false,
        };
        if stale {
            debug!(slot = %self.slot, "discarding cookie script of a superseded load");
            self.pending_cookies = None;
        }
    }

    pub fn refresh(&mut self) {
        self.surface_call("reload", |s| s.reload());
    }

    pub fn stop(&mut self) {
        self.surface_call("stop", |s| s.stop());
    }

    pub fn go_back(&mut self) {
        self.surface_call("go_back", |s| s.go_back());
    }

    pub fn go_forward(&mut self) {
        self.surface_call("go_forward", |s| s.go_forward());
    }

    pub fn go_home(&mut self) {
        let home = self.settings.home_destination.clone();
        self.set_destination(&home);
    }

    /// Issue a surface command, treating "not ready" as a skipped call.
    pub(super) fn surface_call(
        &mut self,
        what: &'static str,
        call: impl FnOnce(&mut Box<dyn RenderSurface>) -> Result<(), SurfaceError>,
    ) -> bool {
        match call(&mut self.surface) {
            Ok(()) => true,
            Err(SurfaceError::NotReady) => {
                debug!(slot = %self.slot, command = what, "surface not ready, skipped");
                false
            }
            Err(e) => {
                warn!(slot = %self.slot, command = what, error = %e, "surface command failed");
                false
            }
        }
    }
}
