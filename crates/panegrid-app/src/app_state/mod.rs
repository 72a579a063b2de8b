//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the host window, the pane pool, the fullscreen
//! coordinator and the empty-state view, and routes pool events between them.

mod core;
mod event_handler;
mod init;
mod layout;
mod polling;
mod shutdown;
mod title;
mod types;

#[cfg(test)]
mod test_support;

pub use core::PanegridApp;
