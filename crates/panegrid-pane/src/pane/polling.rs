//! Surface event pumping and timer firing.

use std::time::Instant;

use panegrid_common::PaneEvent;
use panegrid_surface::{ControlSignal, SurfaceEvent};
use tracing::debug;

use super::types::{LoadState, Pane, PaneTimer};
use crate::destination::is_web_destination;

impl Pane {
    /// Advance the pane to `now`: handle queued surface events, then run
    /// every deferred step that is due.
    pub fn poll(&mut self, now: Instant) {
        self.now = now;
        for event in self.surface.drain_events() {
            self.handle_surface_event(event);
        }
        for timer in self.timers.expire(now) {
            self.fire(timer);
        }
    }

    /// Take the events raised since the last call.
    pub fn drain_events(&mut self) -> Vec<PaneEvent> {
        std::mem::take(&mut self.outbox)
    }

    fn fire(&mut self, timer: PaneTimer) {
        match timer {
            PaneTimer::Dispatch => self.dispatch(),
            PaneTimer::CookieSave => self.save_cookies(),
            PaneTimer::Zoom => self.update_zoom(),
            PaneTimer::RevealControls => self.reveal_controls(),
            PaneTimer::HideControls => self.hide_controls(),
            PaneTimer::Autosave => {
                // A hidden pane may still carry an id another slot now shows.
                if self.visible {
                    debug!(slot = %self.slot, "autosave");
                    self.save_state();
                }
                self.arm(PaneTimer::Autosave, self.settings.autosave_interval);
            }
        }
    }

    fn handle_surface_event(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::LoadStarted => {
                // Every navigation rebuilds the overlay.
                self.last_controls = None;
                self.set_status("Loading… 0%".into(), Some(0));
            }
            SurfaceEvent::UrlChanged(url) => {
                if url != self.current_url {
                    self.current_url = url.clone();
                    self.outbox.push(PaneEvent::DestinationChanged(url));
                }
            }
            SurfaceEvent::TitleChanged(title) => {
                self.title = title.clone();
                self.outbox.push(PaneEvent::TitleChanged(title));
            }
            SurfaceEvent::Progress(progress) => {
                let progress = progress.min(100);
                let bar = (progress < 100).then_some(progress);
                self.set_status(format!("Loading… {progress}%"), bar);
                self.outbox.push(PaneEvent::LoadProgress(progress));
            }
            SurfaceEvent::LoadFinished { success } => self.on_load_finished(success),
            SurfaceEvent::ScriptResult { ticket, value } => {
                self.handle_script_result(ticket, value)
            }
            SurfaceEvent::Control(signal) => self.on_control(signal),
        }
    }

    fn on_load_finished(&mut self, success: bool) {
        // Only the dispatched destination landing counts; an about:blank
        // finishing first is not our load.
        let landed = !is_web_destination(&self.destination)
            || self
                .surface
                .page_url()
                .is_some_and(|url| is_web_destination(&url));
        let ours = self.load_state == LoadState::Dispatched && landed;
        if ours {
            self.load_state = if success {
                LoadState::Finished
            } else {
                LoadState::Failed
            };
        }
        self.last_controls = None;
        let status = if success { "Load complete" } else { "Load failed" };
        self.set_status(status.into(), None);

        if success {
            self.record_visit();
            if ours {
                self.flush_pending_cookies();
            }
            if self.in_layout && self.sub_window_id.is_some() {
                self.arm(PaneTimer::CookieSave, self.settings.cookie_save_delay);
            }
            if self.settings.auto_resolution {
                self.arm(PaneTimer::Zoom, self.settings.zoom_after_load);
            }
        } else if ours {
            // The retry of a failed load picks the staged script up again.
            if let Some(pending) = self.pending_cookies.as_mut() {
                pending.bound_dispatch = None;
            }
        }
        self.outbox.push(PaneEvent::LoadFinished(success));
    }

    fn on_control(&mut self, signal: ControlSignal) {
        match signal {
            ControlSignal::ToggleFullscreen => self.outbox.push(PaneEvent::FullscreenRequested),
            ControlSignal::Escape if self.fullscreen => {
                self.outbox.push(PaneEvent::FullscreenRequested)
            }
            ControlSignal::Escape => {}
            ControlSignal::Refresh => self.refresh(),
            ControlSignal::Back => self.go_back(),
            ControlSignal::Forward => self.go_forward(),
            ControlSignal::Stop => self.stop(),
            ControlSignal::Home => self.go_home(),
            ControlSignal::Close => self.outbox.push(PaneEvent::CloseRequested),
            ControlSignal::PointerMoved { y } => self.pointer_moved(y),
        }
    }
}
