//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, ModifiersState, NamedKey};
use winit::window::WindowId;

use panegrid_common::Rect;

use super::core::PanegridApp;
use super::types::SCROLL_LINE_HEIGHT;

/// Shortcuts handled by the host window itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum HostShortcut {
    ExitFullscreen,
    Columns(u32),
    RefreshAll,
    /// Log every shown pane out.
    LogoutAll,
    /// Re-read the session from the store and restore saved pane state.
    ReloadSession,
}

/// Map a pressed key to a host shortcut.
pub(super) fn host_shortcut(key: Key<&str>, modifiers: ModifiersState) -> Option<HostShortcut> {
    let command = modifiers.control_key() || modifiers.super_key();
    match key {
        Key::Named(NamedKey::Escape | NamedKey::F11) => Some(HostShortcut::ExitFullscreen),
        Key::Named(NamedKey::F5) => Some(HostShortcut::RefreshAll),
        Key::Character(c) if command && modifiers.shift_key() => match c {
            "l" | "L" => Some(HostShortcut::LogoutAll),
            "r" | "R" => Some(HostShortcut::ReloadSession),
            _ => None,
        },
        Key::Character(c) if command => match c {
            "1" => Some(HostShortcut::Columns(1)),
            "2" => Some(HostShortcut::Columns(2)),
            "3" => Some(HostShortcut::Columns(3)),
            _ => None,
        },
        _ => None,
    }
}

impl ApplicationHandler for PanegridApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.start_session();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    let scale = self.window.as_ref().map_or(1.0, |w| w.scale_factor());
                    let logical = size.to_logical::<f64>(scale);
                    self.resize_empty_state(logical.width, logical.height);
                    self.handle_resized(Rect::new(0.0, 0.0, logical.width, logical.height));
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, lines) => f64::from(lines) * SCROLL_LINE_HEIGHT,
                    MouseScrollDelta::PixelDelta(position) => {
                        let scale = self.window.as_ref().map_or(1.0, |w| w.scale_factor());
                        position.to_logical::<f64>(scale).y
                    }
                };
                // Wheel up (positive) moves the content down.
                self.scroll_grid(-dy);
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}

impl PanegridApp {
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        if let Some(shortcut) = host_shortcut(event.logical_key.as_ref(), self.modifiers) {
            self.run_shortcut(shortcut);
        }
    }

    pub(super) fn run_shortcut(&mut self, shortcut: HostShortcut) {
        tracing::debug!(?shortcut, "host shortcut");
        match shortcut {
            HostShortcut::ExitFullscreen => self.exit_fullscreen(),
            HostShortcut::Columns(columns) => self.apply_columns(columns),
            HostShortcut::RefreshAll => {
                if let Some(pool) = self.pool.as_mut() {
                    pool.refresh_all();
                }
            }
            HostShortcut::LogoutAll => {
                if let Some(pool) = self.pool.as_mut() {
                    pool.clear_login_state_all();
                }
            }
            HostShortcut::ReloadSession => self.reload_session(),
        }
    }

    /// The host window fills the screen while a pane is fullscreen, so its
    /// new size is the fullscreen pane's bounds. Otherwise it is the
    /// viewport the grid scrolls in.
    pub(super) fn handle_resized(&mut self, bounds: Rect) {
        let (Some(pool), Some(fullscreen)) = (self.pool.as_mut(), self.fullscreen.as_mut()) else {
            return;
        };
        if fullscreen.is_fullscreen() {
            fullscreen.set_screen(bounds, pool);
        } else {
            pool.set_viewport_height(bounds.height);
        }
    }

    /// Scroll the grid; ignored while a pane is fullscreen.
    pub(super) fn scroll_grid(&mut self, delta: f64) {
        if self.fullscreen.as_ref().is_some_and(|f| f.is_fullscreen()) {
            return;
        }
        if let Some(pool) = self.pool.as_mut() {
            pool.scroll_by(delta);
        }
    }
}
