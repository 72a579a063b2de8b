//! The PanePool owns the pooled panes and arranges them as a grid.

mod assignment;
mod layout;
mod persistence;
mod polling;
mod types;

pub use types::*;
