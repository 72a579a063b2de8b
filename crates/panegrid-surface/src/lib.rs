//! Render surface collaborator.
//!
//! A pane owns exactly one [`RenderSurface`] for its whole life and only
//! issues commands to it. Engine callbacks (load progress, title changes,
//! script results, control-overlay input) are queued by the surface and
//! handed to the pane through [`RenderSurface::drain_events`].
//!
//! - [`WrySurface`] embeds a `wry` child webview
//! - [`fake::FakeSurface`] records commands for tests and headless runs

pub mod bounds;
pub mod controls;
pub mod events;
pub mod fake;
pub mod ipc;
pub mod scripts;
pub mod wry_surface;

use panegrid_common::{Rect, SurfaceError};

pub use controls::ControlsView;
pub use events::{ControlSignal, PageLoadState, ScriptTicket, SurfaceEvent};
pub use wry_surface::{SurfaceConfig, WrySurface};

/// Command interface to one rendering engine instance.
pub trait RenderSurface {
    /// Whether the engine page exists and can take commands.
    fn is_ready(&self) -> bool;

    /// Whether a navigation is currently in flight.
    fn is_loading(&self) -> bool;

    /// Last URL the engine committed, if any.
    fn page_url(&self) -> Option<String>;

    fn load_url(&mut self, url: &str) -> Result<(), SurfaceError>;

    fn reload(&mut self) -> Result<(), SurfaceError>;

    fn stop(&mut self) -> Result<(), SurfaceError>;

    fn go_back(&mut self) -> Result<(), SurfaceError>;

    fn go_forward(&mut self) -> Result<(), SurfaceError>;

    /// Run `script` in the current document. With a ticket, the script's
    /// result arrives later as [`SurfaceEvent::ScriptResult`]; results are
    /// FIFO per surface.
    fn run_script(&mut self, script: &str, ticket: Option<ScriptTicket>)
        -> Result<(), SurfaceError>;

    fn set_zoom(&mut self, factor: f64) -> Result<(), SurfaceError>;

    fn set_bounds(&mut self, bounds: Rect) -> Result<(), SurfaceError>;

    fn set_visible(&mut self, visible: bool) -> Result<(), SurfaceError>;

    /// Drop everything in the engine's own cookie store.
    fn clear_cookie_store(&mut self) -> Result<(), SurfaceError>;

    /// Redraw the floating controls overlay.
    fn present_controls(&mut self, view: &ControlsView) -> Result<(), SurfaceError>;

    fn drain_events(&mut self) -> Vec<SurfaceEvent>;
}
