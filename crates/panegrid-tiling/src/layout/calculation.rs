//! Row-major grid computation.

use panegrid_common::{Rect, Size, SlotIndex};

use super::GridGeometry;

impl GridGeometry {
    /// Uniform pane size for `columns`; height follows the aspect ratio.
    pub fn pane_size(&self, columns: u32) -> Size {
        let width = if columns <= 1 {
            self.single_column_width
        } else {
            self.multi_column_width
        };
        Size::new(width, width * self.aspect_height / self.aspect_width)
    }

    /// Split `slots` into consecutive rows of `columns`; the last row may be short.
    pub fn rows(&self, slots: &[SlotIndex], columns: u32) -> Vec<Vec<SlotIndex>> {
        let columns = columns.max(1) as usize;
        slots.chunks(columns).map(<[SlotIndex]>::to_vec).collect()
    }

    /// Rect of every slot in `rows`, in row-major order.
    pub fn compute(&self, rows: &[Vec<SlotIndex>], columns: u32) -> Vec<(SlotIndex, Rect)> {
        let size = self.pane_size(columns);
        let mut out = Vec::new();
        for (row, slots) in rows.iter().enumerate() {
            let y = self.margin + row as f64 * (size.height + self.gap);
            for (col, slot) in slots.iter().enumerate() {
                let x = self.margin + col as f64 * (size.width + self.gap);
                out.push((*slot, Rect::new(x, y, size.width, size.height)));
            }
        }
        out
    }

    /// Canvas size needed to show `row_count` rows of `columns`.
    pub fn canvas_size(&self, row_count: usize, columns: u32) -> Size {
        let size = self.pane_size(columns);
        let columns = columns.max(1) as f64;
        let rows = row_count as f64;
        let width = size.width * columns + self.gap * (columns - 1.0) + 2.0 * self.margin;
        let height = if row_count == 0 {
            2.0 * self.margin
        } else {
            size.height * rows + self.gap * (rows - 1.0) + 2.0 * self.margin
        };
        Size::new(width, height)
    }

    /// Host window width that fits `columns` panes side by side.
    pub fn required_window_width(&self, columns: u32) -> f64 {
        let size = self.pane_size(columns);
        let columns = columns.max(1) as f64;
        size.width * columns + self.gap * (columns - 1.0) + 2.0 * self.host_padding
    }
}
