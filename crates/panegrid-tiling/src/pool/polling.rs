//! Pane polling and pool event fan-out.

use std::time::Instant;

use panegrid_common::{PaneEvent, PoolEvent};
use tracing::debug;

use super::types::{PanePool, PoolTimer};

impl PanePool {
    /// Advance every pane to `now`, publish their events on the bus, then
    /// run the pool autosave when due.
    pub fn poll(&mut self, now: Instant) {
        if self.shut_down {
            return;
        }
        self.now = now;
        let mut outgoing = Vec::new();
        for pane in &mut self.panes {
            pane.poll(now);
            let slot = pane.slot();
            outgoing.extend(pane.drain_events().into_iter().map(|event| match event {
                PaneEvent::FullscreenRequested => PoolEvent::FullscreenRequested(slot),
                PaneEvent::CloseRequested => PoolEvent::CloseRequested(slot),
                event => PoolEvent::Pane { slot, event },
            }));
        }
        for event in outgoing {
            self.bus.publish(event);
        }

        for timer in self.timers.expire(now) {
            match timer {
                PoolTimer::Autosave => {
                    debug!("pool autosave");
                    self.save_all();
                    self.timers.arm(PoolTimer::Autosave, self.now, self.autosave_interval);
                }
            }
        }
    }
}
