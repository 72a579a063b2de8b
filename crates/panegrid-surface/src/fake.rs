//! Recording surface with scripted engine behaviour.
//!
//! [`FakeSurface`] is handed to a pane like any other surface; the paired
//! [`FakeHandle`] stays with the caller to inspect issued commands and to
//! feed engine events back.

use std::cell::RefCell;
use std::rc::Rc;

use panegrid_common::{Rect, SurfaceError};

use crate::controls::ControlsView;
use crate::events::{ScriptTicket, SurfaceEvent};
use crate::RenderSurface;

/// A command the pane issued to the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    LoadUrl(String),
    Reload,
    Stop,
    GoBack,
    GoForward,
    RunScript {
        script: String,
        ticket: Option<ScriptTicket>,
    },
    Zoom(f64),
    Bounds(Rect),
    Visible(bool),
    ClearCookieStore,
    Controls(ControlsView),
}

#[derive(Debug)]
struct FakeState {
    ready: bool,
    loading: bool,
    page_url: Option<String>,
    commands: Vec<SurfaceCommand>,
    events: Vec<SurfaceEvent>,
}

pub struct FakeSurface {
    state: Rc<RefCell<FakeState>>,
}

#[derive(Clone)]
pub struct FakeHandle {
    state: Rc<RefCell<FakeState>>,
}

impl FakeSurface {
    /// A ready surface with no page loaded.
    pub fn new() -> (Self, FakeHandle) {
        let state = Rc::new(RefCell::new(FakeState {
            ready: true,
            loading: false,
            page_url: None,
            commands: Vec::new(),
            events: Vec::new(),
        }));
        (
            Self {
                state: Rc::clone(&state),
            },
            FakeHandle { state },
        )
    }
}

impl FakeHandle {
    pub fn set_ready(&self, ready: bool) {
        self.state.borrow_mut().ready = ready;
    }

    pub fn set_loading(&self, loading: bool) {
        self.state.borrow_mut().loading = loading;
    }

    pub fn commands(&self) -> Vec<SurfaceCommand> {
        self.state.borrow().commands.clone()
    }

    pub fn clear_commands(&self) {
        self.state.borrow_mut().commands.clear();
    }

    /// URLs passed to `load_url`, in order.
    pub fn loads(&self) -> Vec<String> {
        self.state
            .borrow()
            .commands
            .iter()
            .filter_map(|c| match c {
                SurfaceCommand::LoadUrl(url) => Some(url.clone()),
                _ => None,
            })
            .collect()
    }

    /// Scripts passed to `run_script`, in order.
    pub fn scripts(&self) -> Vec<(String, Option<ScriptTicket>)> {
        self.state
            .borrow()
            .commands
            .iter()
            .filter_map(|c| match c {
                SurfaceCommand::RunScript { script, ticket } => Some((script.clone(), *ticket)),
                _ => None,
            })
            .collect()
    }

    pub fn last_controls(&self) -> Option<ControlsView> {
        self.state
            .borrow()
            .commands
            .iter()
            .rev()
            .find_map(|c| match c {
                SurfaceCommand::Controls(view) => Some(view.clone()),
                _ => None,
            })
    }

    pub fn last_zoom(&self) -> Option<f64> {
        self.state
            .borrow()
            .commands
            .iter()
            .rev()
            .find_map(|c| match c {
                SurfaceCommand::Zoom(z) => Some(*z),
                _ => None,
            })
    }

    pub fn count(&self, matches: impl Fn(&SurfaceCommand) -> bool) -> usize {
        self.state.borrow().commands.iter().filter(|c| matches(c)).count()
    }

    pub fn push_event(&self, event: SurfaceEvent) {
        self.state.borrow_mut().events.push(event);
    }

    /// Simulate the engine committing `url` and finishing the load.
    pub fn finish_load(&self, url: &str, success: bool) {
        let mut state = self.state.borrow_mut();
        state.loading = false;
        state.page_url = Some(url.to_string());
        state.events.push(SurfaceEvent::UrlChanged(url.to_string()));
        state.events.push(SurfaceEvent::Progress(100));
        state.events.push(SurfaceEvent::LoadFinished { success });
    }

    /// Deliver the result of a ticketed script.
    pub fn complete_script(&self, ticket: ScriptTicket, value: &str) {
        self.push_event(SurfaceEvent::ScriptResult {
            ticket,
            value: value.to_string(),
        });
    }

    /// Ticket of the most recent ticketed script containing `needle`.
    pub fn ticket_for(&self, needle: &str) -> Option<ScriptTicket> {
        self.scripts()
            .into_iter()
            .rev()
            .find(|(script, ticket)| ticket.is_some() && script.contains(needle))
            .and_then(|(_, ticket)| ticket)
    }
}

impl FakeSurface {
    fn record(&self, command: SurfaceCommand) -> Result<(), SurfaceError> {
        let mut state = self.state.borrow_mut();
        if !state.ready {
            return Err(SurfaceError::NotReady);
        }
        state.commands.push(command);
        Ok(())
    }
}

impl RenderSurface for FakeSurface {
    fn is_ready(&self) -> bool {
        self.state.borrow().ready
    }

    fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    fn page_url(&self) -> Option<String> {
        self.state.borrow().page_url.clone()
    }

    fn load_url(&mut self, url: &str) -> Result<(), SurfaceError> {
        self.record(SurfaceCommand::LoadUrl(url.to_string()))?;
        self.state.borrow_mut().loading = true;
        Ok(())
    }

    fn reload(&mut self) -> Result<(), SurfaceError> {
        self.record(SurfaceCommand::Reload)
    }

    fn stop(&mut self) -> Result<(), SurfaceError> {
        self.record(SurfaceCommand::Stop)
    }

    fn go_back(&mut self) -> Result<(), SurfaceError> {
        self.record(SurfaceCommand::GoBack)
    }

    fn go_forward(&mut self) -> Result<(), SurfaceError> {
        self.record(SurfaceCommand::GoForward)
    }

    fn run_script(
        &mut self,
        script: &str,
        ticket: Option<ScriptTicket>,
    ) -> Result<(), SurfaceError> {
        self.record(SurfaceCommand::RunScript {
            script: script.to_string(),
            ticket,
        })
    }

    fn set_zoom(&mut self, factor: f64) -> Result<(), SurfaceError> {
        self.record(SurfaceCommand::Zoom(factor))
    }

    fn set_bounds(&mut self, bounds: Rect) -> Result<(), SurfaceError> {
        self.record(SurfaceCommand::Bounds(bounds))
    }

    fn set_visible(&mut self, visible: bool) -> Result<(), SurfaceError> {
        self.record(SurfaceCommand::Visible(visible))
    }

    fn clear_cookie_store(&mut self) -> Result<(), SurfaceError> {
        self.record(SurfaceCommand::ClearCookieStore)
    }

    fn present_controls(&mut self, view: &ControlsView) -> Result<(), SurfaceError> {
        self.record(SurfaceCommand::Controls(view.clone()))
    }

    fn drain_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.state.borrow_mut().events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_commands_in_order() {
        let (mut surface, handle) = FakeSurface::new();
        surface.load_url("https://a.test").unwrap();
        surface.set_zoom(0.8).unwrap();
        surface.run_script("1+1", Some(ScriptTicket(7))).unwrap();

        assert_eq!(handle.loads(), vec!["https://a.test"]);
        assert_eq!(handle.last_zoom(), Some(0.8));
        assert_eq!(handle.ticket_for("1+1"), Some(ScriptTicket(7)));
        assert!(surface.is_loading());
    }

    #[test]
    fn not_ready_rejects_commands() {
        let (mut surface, handle) = FakeSurface::new();
        handle.set_ready(false);
        assert!(matches!(
            surface.load_url("https://a.test"),
            Err(SurfaceError::NotReady)
        ));
        assert!(handle.commands().is_empty());
    }

    #[test]
    fn finish_load_queues_events_and_commits_url() {
        let (mut surface, handle) = FakeSurface::new();
        surface.load_url("https://a.test").unwrap();
        handle.finish_load("https://a.test/", true);

        assert!(!surface.is_loading());
        assert_eq!(surface.page_url().as_deref(), Some("https://a.test/"));
        let events = surface.drain_events();
        assert_eq!(events.len(), 3);
        assert_eq!(
            events.last(),
            Some(&SurfaceEvent::LoadFinished { success: true })
        );
        assert!(surface.drain_events().is_empty());
    }
}
