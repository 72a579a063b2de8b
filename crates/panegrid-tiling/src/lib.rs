//! Pane pool, grid layout and fullscreen transitions.
//!
//! [`PanePool`] owns a fixed set of [`panegrid_pane::Pane`]s created once
//! and recycled across layout changes; [`GridGeometry`] maps the visible
//! panes onto row-major grid rects; [`FullscreenCoordinator`] promotes one
//! pane at a time to the screen and returns it to its grid position.

pub mod fullscreen;
pub mod layout;
pub mod pool;

pub use fullscreen::{FullscreenCoordinator, FullscreenState};
pub use layout::GridGeometry;
pub use pool::{LayoutPhase, PanePool, PoolOptions, Stage};
