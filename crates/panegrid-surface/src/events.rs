//! Surface event types.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Correlates an asynchronous script result with the request that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScriptTicket(pub u64);

/// Input coming from the floating controls overlay or page key handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ControlSignal {
    /// Fullscreen button or F11.
    ToggleFullscreen,
    /// Refresh button.
    Refresh,
    /// Alt+Left.
    Back,
    /// Alt+Right.
    Forward,
    /// Ctrl+Period.
    Stop,
    /// Alt+Home.
    Home,
    /// Ctrl+W.
    Close,
    /// Escape.
    Escape,
    /// Pointer moved inside the page; `y` in CSS pixels from the top.
    PointerMoved { y: f64 },
}

/// Events emitted by a render surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// A navigation began.
    LoadStarted,
    UrlChanged(String),
    TitleChanged(String),
    /// Load progress, 0-100.
    Progress(u8),
    LoadFinished { success: bool },
    /// Result text of a ticketed script.
    ScriptResult { ticket: ScriptTicket, value: String },
    Control(ControlSignal),
}
