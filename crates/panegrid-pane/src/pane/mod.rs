//! The pooled pane and its lifecycle.

mod navigation;
mod polling;
mod presentation;
mod session;
mod types;

pub use types::*;
