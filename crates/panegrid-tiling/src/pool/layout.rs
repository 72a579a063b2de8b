//! Visible count, grid rows, stage switching and detach/attach.

use panegrid_common::{LayoutError, PoolEvent, Rect, Size, SlotIndex};
use panegrid_store::COLUMNS_SETTING;
use tracing::{debug, info, warn};

use super::types::{LayoutPhase, PanePool, Stage, MAX_COLUMNS};

impl PanePool {
    /// Show the first `count` panes as a grid of `columns` and hide the rest.
    ///
    /// Returns `Ok(false)` when nothing changed and `force` is unset.
    /// Invalid arguments and calls made while a rebuild is running are
    /// rejected and leave the layout untouched.
    pub fn set_visible_count(
        &mut self,
        count: usize,
        columns: u32,
        force: bool,
    ) -> Result<bool, LayoutError> {
        self.validate(count, columns)?;
        self.ensure_idle()?;
        if !force && count == self.visible_count && columns == self.columns {
            return Ok(false);
        }
        self.phase = LayoutPhase::AssigningLayout;
        self.apply_visible_count(count, columns);
        self.phase = LayoutPhase::Idle;
        Ok(true)
    }

    /// Change the column count and persist it as the `windowColumns` setting.
    pub fn set_column_count(&mut self, columns: u32) -> Result<bool, LayoutError> {
        if !(1..=MAX_COLUMNS).contains(&columns) {
            warn!(columns, "rejecting column count");
            return Err(LayoutError::InvalidColumnCount(columns));
        }
        let changed = self.set_visible_count(self.visible_count, columns, false)?;
        if let Some(store) = self.store.as_deref() {
            if let Err(e) = store.set_setting(COLUMNS_SETTING, serde_json::json!(columns)) {
                warn!(columns, error = %e, "failed to persist column count");
            }
        }
        Ok(changed)
    }

    pub(super) fn validate(&self, count: usize, columns: u32) -> Result<(), LayoutError> {
        if count > self.panes.len() {
            warn!(count, max = self.panes.len(), "rejecting visible count");
            return Err(LayoutError::InvalidVisibleCount {
                requested: count,
                max: self.panes.len(),
            });
        }
        if !(1..=MAX_COLUMNS).contains(&columns) {
            warn!(columns, "rejecting column count");
            return Err(LayoutError::InvalidColumnCount(columns));
        }
        Ok(())
    }

    pub(super) fn ensure_idle(&self) -> Result<(), LayoutError> {
        match self.phase {
            LayoutPhase::Idle => Ok(()),
            LayoutPhase::AssigningLayout => {
                warn!("layout rebuild requested while one is running, ignoring");
                Err(LayoutError::RebuildInProgress)
            }
        }
    }

    /// Rebuild rows, visibility, size policy and geometry. Callers hold the
    /// `AssigningLayout` phase.
    pub(super) fn apply_visible_count(&mut self, count: usize, columns: u32) {
        let previous = self.visible_count;
        self.visible_count = count;
        self.columns = columns;
        self.rebuild_rows();

        let size = self.geometry.pane_size(columns);
        for slot in self.rows.iter().flatten().copied().collect::<Vec<_>>() {
            if let Some(pane) = self.pane_mut(slot) {
                pane.apply_size_policy(size);
            }
        }
        self.apply_visibility();
        self.relayout();

        for position in previous..count {
            self.bus
                .publish(PoolEvent::PaneAdded(SlotIndex::from_position(position)));
        }
        for position in count..previous {
            self.bus
                .publish(PoolEvent::PaneRemoved(SlotIndex::from_position(position)));
        }
        self.bus.publish(PoolEvent::LayoutChanged(count));
        info!(visible = count, columns, rows = self.rows.len(), "grid rebuilt");
    }

    fn rebuild_rows(&mut self) {
        let detached = self.detached;
        let slots: Vec<SlotIndex> = (0..self.visible_count)
            .map(SlotIndex::from_position)
            .filter(|slot| Some(*slot) != detached)
            .collect();
        self.rows = self.geometry.rows(&slots, self.columns);
    }

    fn in_grid(&self, slot: SlotIndex) -> bool {
        self.rows.iter().any(|row| row.contains(&slot))
    }

    fn apply_visibility(&mut self) {
        let placement: Vec<(bool, bool)> = self
            .panes
            .iter()
            .map(|pane| {
                let slot = pane.slot();
                let in_layout = self.in_grid(slot) || self.detached == Some(slot);
                let shown = match self.stage {
                    Stage::Grid => self.in_grid(slot),
                    Stage::Fullscreen(active) => slot == active,
                };
                (in_layout, shown)
            })
            .collect();
        for (pane, (in_layout, shown)) in self.panes.iter_mut().zip(placement) {
            pane.set_in_layout(in_layout);
            pane.set_visible(shown);
        }
    }

    /// Push grid rects to every pane in the grid, shifted up by the
    /// scroll offset.
    pub fn relayout(&mut self) {
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll());
        let offset = self.scroll_offset;
        for (slot, mut rect) in self.geometry.compute(&self.rows, self.columns) {
            rect.y -= offset;
            if let Some(pane) = self.pane_mut(slot) {
                pane.set_geometry(rect);
            }
        }
    }

    /// How far the canvas can scroll inside the current viewport.
    pub fn max_scroll(&self) -> f64 {
        match self.viewport_height {
            Some(height) => (self.canvas_size().height - height).max(0.0),
            None => 0.0,
        }
    }

    /// Height of the host area the grid is drawn in. Re-clamps the offset.
    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = Some(height.max(0.0));
        self.relayout();
    }

    /// Scroll the grid by `delta` logical pixels; positive moves the
    /// content up. Returns whether the offset changed.
    pub fn scroll_by(&mut self, delta: f64) -> bool {
        let target = (self.scroll_offset + delta).clamp(0.0, self.max_scroll());
        if (target - self.scroll_offset).abs() < f64::EPSILON {
            return false;
        }
        debug!(offset = target, "grid scrolled");
        self.scroll_offset = target;
        self.relayout();
        true
    }

    /// Canvas needed for the current rows.
    pub fn canvas_size(&self) -> Size {
        self.geometry.canvas_size(self.rows.len(), self.columns)
    }

    /// Switch between the grid and a single fullscreen pane.
    pub fn show_stage(&mut self, stage: Stage) {
        if self.stage == stage {
            return;
        }
        debug!(?stage, "stage changed");
        self.stage = stage;
        self.apply_visibility();
    }

    /// Lift `slot` out of its row. Returns its row-major position.
    ///
    /// The pane keeps its surface; only the row membership changes. Rows
    /// keep their remaining panes in place so the position can be reused.
    pub fn detach(&mut self, slot: SlotIndex) -> Result<usize, LayoutError> {
        let position = self.position_of(slot).ok_or(LayoutError::NotInGrid(slot))?;
        for row in &mut self.rows {
            row.retain(|s| *s != slot);
        }
        self.detached = Some(slot);
        debug!(%slot, position, "pane detached from grid");
        Ok(position)
    }

    /// Put `slot` back at row-major `position`. When that row no longer
    /// has room for it, the grid is rebuilt instead.
    pub fn attach(&mut self, slot: SlotIndex, position: usize) -> Result<(), LayoutError> {
        if self.pane(slot).is_none() {
            return Err(LayoutError::UnknownSlot(slot));
        }
        if self.detached == Some(slot) {
            self.detached = None;
        }
        if self.position_of(slot).is_some() {
            return Ok(());
        }

        let columns = self.columns as usize;
        let (row, col) = (position / columns, position % columns);
        let counted = slot.position() < self.visible_count;
        match self.rows.get_mut(row) {
            Some(cells) if counted && cells.len() < columns && col <= cells.len() => {
                cells.insert(col, slot);
                debug!(%slot, position, "pane reattached in place");
                self.relayout();
            }
            _ => {
                debug!(%slot, position, "original row gone, rebuilding grid");
                self.ensure_idle()?;
                self.phase = LayoutPhase::AssigningLayout;
                self.apply_visible_count(self.visible_count, self.columns);
                self.phase = LayoutPhase::Idle;
            }
        }
        Ok(())
    }

    /// Re-apply the grid size policy to one pane.
    pub fn restore_size_policy(&mut self, slot: SlotIndex) {
        if !self.in_grid(slot) {
            return;
        }
        let size = self.geometry.pane_size(self.columns);
        if let Some(pane) = self.pane_mut(slot) {
            pane.apply_size_policy(size);
        }
    }

    /// Screen bounds changed; every pane uses it for its fullscreen zoom.
    pub fn set_screen(&mut self, screen: Rect) {
        for pane in &mut self.panes {
            pane.set_screen_size(screen.size());
        }
    }

    pub fn set_pane_geometry(&mut self, slot: SlotIndex, bounds: Rect) -> Result<(), LayoutError> {
        let pane = self.pane_mut(slot).ok_or(LayoutError::UnknownSlot(slot))?;
        pane.set_geometry(bounds);
        Ok(())
    }
}
