//! Pool-wide save, load and shutdown.

use tracing::{debug, info};

use super::types::PanePool;

impl PanePool {
    /// Save every active pane's state and cookies.
    pub fn save_all(&mut self) {
        for slot in self.active_slots() {
            if let Some(pane) = self.pane_mut(slot) {
                pane.save_state();
            }
        }
        debug!(panes = self.active_slots().len(), "pool state saved");
    }

    /// Reload every active pane's stored state.
    pub fn load_all(&mut self) {
        for slot in self.active_slots() {
            if let Some(pane) = self.pane_mut(slot) {
                pane.load_state();
            }
        }
    }

    pub fn refresh_all(&mut self) {
        for slot in self.active_slots() {
            if let Some(pane) = self.pane_mut(slot) {
                pane.refresh();
            }
        }
    }

    /// Log every active, identified pane out. Returns how many were cleared.
    pub fn clear_login_state_all(&mut self) -> usize {
        let mut cleared = 0;
        for slot in self.active_slots() {
            if let Some(pane) = self.pane_mut(slot) {
                if pane.sub_window_id().is_some() {
                    pane.clear_login_state();
                    cleared += 1;
                }
            }
        }
        info!(cleared, "login state cleared");
        cleared
    }

    /// Final save of active panes; panes outside the layout are released
    /// without saving. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        self.timers.clear();
        let active = self.active_slots();
        for pane in &mut self.panes {
            if active.contains(&pane.slot()) {
                pane.shutdown();
            } else {
                pane.release();
            }
        }
        info!(saved = active.len(), "pane pool shut down");
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }
}
