//! A pooled browser pane.
//!
//! A [`Pane`] owns one render surface for its whole life and carries the
//! per-slot session state: the bound logical sub-window, the lazily
//! dispatched destination, the cookie save/load protocol, the zoom policy
//! and the floating controls overlay.
//!
//! Panes never block. Deferred work (delayed dispatch, cookie saves, zoom
//! updates, control auto-hide, autosave) is kept in a per-pane timer wheel
//! and runs when the owner calls [`Pane::poll`].

pub mod cookies;
pub mod destination;
mod pane;
pub mod settings;
pub mod zoom;

pub use destination::normalize_destination;
pub use pane::{LoadState, Pane, PaneTimer, SizeConstraints};
pub use settings::PaneSettings;
