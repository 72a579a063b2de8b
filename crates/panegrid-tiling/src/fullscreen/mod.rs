//! Fullscreen coordinator: promotes one pane at a time to the screen.
//!
//! Entering records the pane's grid position, detaches it, saves its
//! cookies right away and switches the pool to the fullscreen stage. After
//! a short settle delay the pane is sized to the screen. Exiting reverses
//! that: the pane leaves fullscreen presentation, reloads its cookies,
//! returns to its recorded position and, after another settle delay, gets
//! the grid size policy back.

use std::time::{Duration, Instant};

use panegrid_common::{Rect, SlotIndex, TimerWheel};
use panegrid_config::schema::FullscreenConfig;
use tracing::{debug, info, warn};

use crate::pool::{PanePool, Stage};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenState {
    Normal,
    Fullscreen {
        slot: SlotIndex,
        /// Row-major grid position the pane came from.
        original_position: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum SettleStep {
    Enter,
    Exit,
}

pub struct FullscreenCoordinator {
    state: FullscreenState,
    screen: Rect,
    enter_settle: Duration,
    exit_settle: Duration,
    timers: TimerWheel<SettleStep>,
    /// Pane waiting for its size policy after leaving fullscreen.
    exiting: Option<SlotIndex>,
    now: Instant,
}

impl FullscreenCoordinator {
    pub fn new(config: &FullscreenConfig, screen: Rect, now: Instant) -> Self {
        Self {
            state: FullscreenState::Normal,
            screen,
            enter_settle: Duration::from_millis(config.enter_settle_ms),
            exit_settle: Duration::from_millis(config.exit_settle_ms),
            timers: TimerWheel::new(),
            exiting: None,
            now,
        }
    }

    pub fn state(&self) -> FullscreenState {
        self.state
    }

    pub fn is_fullscreen(&self) -> bool {
        matches!(self.state, FullscreenState::Fullscreen { .. })
    }

    /// The pane currently shown fullscreen.
    pub fn active(&self) -> Option<SlotIndex> {
        match self.state {
            FullscreenState::Fullscreen { slot, .. } => Some(slot),
            FullscreenState::Normal => None,
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// A pane asked to toggle fullscreen. While a pane is fullscreen any
    /// request exits, whichever pane raised it.
    pub fn request(&mut self, slot: SlotIndex, pool: &mut PanePool) {
        match self.state {
            FullscreenState::Normal => self.enter(slot, pool),
            FullscreenState::Fullscreen { .. } => self.exit(pool),
        }
    }

    /// Leave fullscreen if a pane is shown; used by host-level shortcuts.
    pub fn exit_if_active(&mut self, pool: &mut PanePool) {
        if self.is_fullscreen() {
            self.exit(pool);
        }
    }

    fn enter(&mut self, slot: SlotIndex, pool: &mut PanePool) {
        let original_position = match pool.detach(slot) {
            Ok(position) => position,
            Err(e) => {
                warn!(%slot, error = %e, "cannot enter fullscreen");
                return;
            }
        };
        if let Some(pane) = pool.pane_mut(slot) {
            if pane.sub_window_id().is_some() {
                pane.save_cookies();
            }
            pane.set_fullscreen_mode(true);
        }
        pool.show_stage(Stage::Fullscreen(slot));
        self.state = FullscreenState::Fullscreen {
            slot,
            original_position,
        };
        // A pane entering right after another left keeps its new policy.
        if self.exiting == Some(slot) {
            self.exiting = None;
            self.timers.cancel(&SettleStep::Exit);
        }
        self.timers.arm(SettleStep::Enter, self.now, self.enter_settle);
        info!(%slot, position = original_position, "entered fullscreen");
    }

    fn exit(&mut self, pool: &mut PanePool) {
        let FullscreenState::Fullscreen {
            slot,
            original_position,
        } = std::mem::replace(&mut self.state, FullscreenState::Normal)
        else {
            return;
        };
        self.timers.cancel(&SettleStep::Enter);

        if let Some(pane) = pool.pane_mut(slot) {
            pane.set_fullscreen_mode(false);
            if pane.sub_window_id().is_some() {
                pane.load_cookies();
            }
        }
        if let Err(e) = pool.attach(slot, original_position) {
            warn!(%slot, error = %e, "failed to reattach pane");
        }
        pool.show_stage(Stage::Grid);
        pool.relayout();

        if let Some(previous) = self.exiting.replace(slot) {
            pool.restore_size_policy(previous);
        }
        self.timers.arm(SettleStep::Exit, self.now, self.exit_settle);
        info!(%slot, position = original_position, "left fullscreen");
    }

    /// The host screen changed size.
    pub fn set_screen(&mut self, screen: Rect, pool: &mut PanePool) {
        self.screen = screen;
        pool.set_screen(screen);
        if let Some(slot) = self.active() {
            if !self.timers.is_armed(&SettleStep::Enter) {
                if let Err(e) = pool.set_pane_geometry(slot, screen) {
                    warn!(%slot, error = %e, "failed to resize fullscreen pane");
                }
            }
        }
    }

    /// Run settle steps that are due.
    pub fn poll(&mut self, now: Instant, pool: &mut PanePool) {
        self.now = now;
        for step in self.timers.expire(now) {
            match step {
                SettleStep::Enter => {
                    // The pane may have left fullscreen before this fired.
                    if let Some(slot) = self.active() {
                        debug!(%slot, "sizing fullscreen pane to screen");
                        if let Err(e) = pool.set_pane_geometry(slot, self.screen) {
                            warn!(%slot, error = %e, "failed to size fullscreen pane");
                        }
                    }
                }
                SettleStep::Exit => {
                    if let Some(slot) = self.exiting.take() {
                        debug!(%slot, "restoring grid size policy");
                        pool.restore_size_policy(slot);
                    }
                }
            }
        }
    }
}
