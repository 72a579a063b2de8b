//! Positional binding of logical sub-windows to pool slots.

use panegrid_common::{LayoutError, LogicalSubWindow, PoolEvent, SlotIndex, SubWindowId};
use tracing::{info, warn};

use super::types::{LayoutPhase, PanePool};

impl PanePool {
    /// Bind slot `i` to `windows[i]` and show exactly that many panes.
    ///
    /// Binding is positional: reordering `windows` changes which logical
    /// window a slot shows. Slots past the end of the list are hidden but
    /// keep their binding and content. Destinations are set before the
    /// identity changes so a new id's cookies wait for its own page.
    /// Publishes [`PoolEvent::AllPanesReady`] once the structure is in place.
    pub fn assign_logical_windows(
        &mut self,
        windows: &[LogicalSubWindow],
    ) -> Result<(), LayoutError> {
        self.ensure_idle()?;
        let count = windows.len().min(self.panes.len());
        if count < windows.len() {
            warn!(
                requested = windows.len(),
                capacity = self.panes.len(),
                "more sub-windows than pooled panes, extra ones are not shown"
            );
        }

        self.phase = LayoutPhase::AssigningLayout;
        if count != self.visible_count {
            self.apply_visible_count(count, self.columns);
        }
        for (pane, window) in self.panes.iter_mut().zip(windows.iter().take(count)) {
            pane.set_destination(&window.url);
            pane.set_logical_identity(i64::from(window.id.0));
            pane.set_name(&window.name);
        }
        self.phase = LayoutPhase::Idle;

        info!(count, "logical sub-windows assigned");
        self.bus.publish(PoolEvent::AllPanesReady);
        Ok(())
    }

    /// Slot of the active pane bound to `id`.
    pub fn find_by_sub_window_id(&self, id: SubWindowId) -> Option<SlotIndex> {
        self.active_slots().into_iter().find(|slot| {
            self.pane(*slot)
                .is_some_and(|pane| pane.sub_window_id() == Some(id))
        })
    }
}
