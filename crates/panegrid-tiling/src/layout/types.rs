//! Grid geometry configuration.

use panegrid_config::schema::LayoutConfig;

/// Sizes and spacing of the pane grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridGeometry {
    /// Pane width with one column.
    pub single_column_width: f64,
    /// Pane width with two or three columns.
    pub multi_column_width: f64,
    pub aspect_width: f64,
    pub aspect_height: f64,
    /// Space between panes and between rows.
    pub gap: f64,
    /// Inset of the grid inside the canvas.
    pub margin: f64,
    /// Horizontal space the host window adds on each side.
    pub host_padding: f64,
}

impl GridGeometry {
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            single_column_width: config.single_column_width as f64,
            multi_column_width: config.multi_column_width as f64,
            aspect_width: config.aspect_width.max(1) as f64,
            aspect_height: config.aspect_height.max(1) as f64,
            gap: config.gap as f64,
            margin: config.margin as f64,
            host_padding: config.host_padding as f64,
        }
    }
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}
