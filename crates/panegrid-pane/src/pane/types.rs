//! Core types and constructor for Pane.

use std::collections::HashMap;
use std::time::Instant;

use panegrid_common::{PaneEvent, Rect, Size, SlotIndex, SubWindowId, TimerWheel};
use panegrid_store::SharedStore;
use panegrid_surface::{ControlsView, RenderSurface, ScriptTicket};

use crate::settings::PaneSettings;

/// Where the bound destination is in its lazy-load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No destination has been requested.
    Idle,
    /// Requested while hidden; the next show replays it.
    Deferred,
    /// Waiting for the dispatch delay.
    Scheduled,
    /// Handed to the surface, load-finished not seen yet.
    Dispatched,
    Finished,
    Failed,
}

/// Size constraints the host applies to the pane's frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeConstraints {
    /// Grid policy: the pane is exactly this size.
    Fixed(Size),
    /// Normal mode before the grid policy is applied.
    Bounded { min: Size },
    /// Fullscreen.
    Unconstrained,
}

/// Deferred per-pane steps; at most one deadline per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneTimer {
    Dispatch,
    CookieSave,
    Zoom,
    Autosave,
    RevealControls,
    HideControls,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ScriptPurpose {
    /// Cookie extraction; the result is written to `owner`'s file.
    SaveCookies { owner: SubWindowId },
}

#[derive(Debug, Clone)]
pub(super) struct PendingCookieScript {
    pub(super) owner: SubWindowId,
    pub(super) script: String,
    /// Dispatch generation the script waits on; `None` until a load is
    /// dispatched.
    pub(super) bound_dispatch: Option<u64>,
}

/// One pooled pane: a render surface plus its session and presentation state.
pub struct Pane {
    pub(super) slot: SlotIndex,
    pub(super) surface: Box<dyn RenderSurface>,
    pub(super) store: Option<SharedStore>,
    pub(super) settings: PaneSettings,

    // -- Identity and content --
    pub(super) sub_window_id: Option<SubWindowId>,
    pub(super) name: String,
    /// Normalized destination last requested.
    pub(super) destination: String,
    /// Last URL the surface reported.
    pub(super) current_url: String,
    pub(super) title: String,
    pub(super) load_state: LoadState,
    pub(super) dispatch_generation: u64,

    // -- Presentation --
    pub(super) visible: bool,
    /// Cleared by the pool for panes outside the grid and fullscreen.
    pub(super) in_layout: bool,
    pub(super) fullscreen: bool,
    pub(super) constraints: SizeConstraints,
    pub(super) bounds: Rect,
    pub(super) screen: Option<Size>,
    pub(super) zoom_factor: f64,
    pub(super) controls_shown: bool,
    pub(super) status: String,
    pub(super) progress: Option<u8>,
    pub(super) last_controls: Option<ControlsView>,

    // -- Deferred work --
    pub(super) now: Instant,
    pub(super) timers: TimerWheel<PaneTimer>,
    pub(super) next_ticket: u64,
    pub(super) scripts: HashMap<ScriptTicket, ScriptPurpose>,
    pub(super) pending_cookies: Option<PendingCookieScript>,
    pub(super) outbox: Vec<PaneEvent>,
}

impl Pane {
    /// Create an unassigned, hidden pane. Autosave starts when a store is
    /// available.
    pub fn new(
        slot: SlotIndex,
        surface: Box<dyn RenderSurface>,
        store: Option<SharedStore>,
        settings: PaneSettings,
        now: Instant,
    ) -> Self {
        let mut timers = TimerWheel::new();
        if store.is_some() {
            timers.arm(PaneTimer::Autosave, now, settings.autosave_interval);
        }
        let min = settings.min_size;
        Self {
            slot,
            surface,
            store,
            settings,
            sub_window_id: None,
            name: String::new(),
            destination: String::new(),
            current_url: String::new(),
            title: String::new(),
            load_state: LoadState::Idle,
            dispatch_generation: 0,
            visible: false,
            in_layout: true,
            fullscreen: false,
            constraints: SizeConstraints::Bounded { min },
            bounds: Rect::default(),
            screen: None,
            zoom_factor: 1.0,
            controls_shown: true,
            status: "Ready".into(),
            progress: None,
            last_controls: None,
            now,
            timers,
            next_ticket: 0,
            scripts: HashMap::new(),
            pending_cookies: None,
            outbox: Vec::new(),
        }
    }

    // -- Accessors --

    pub fn slot(&self) -> SlotIndex {
        self.slot
    }

    pub fn sub_window_id(&self) -> Option<SubWindowId> {
        self.sub_window_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lifecycle(&self) -> LoadState {
        self.load_state
    }

    /// Whether the bound destination has reached the surface, as opposed
    /// to merely being assigned.
    pub fn is_loaded(&self) -> bool {
        matches!(self.load_state, LoadState::Dispatched | LoadState::Finished)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_in_layout(&self) -> bool {
        self.in_layout
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn constraints(&self) -> SizeConstraints {
        self.constraints
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    pub fn controls_shown(&self) -> bool {
        self.controls_shown
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn has_pending_cookie_script(&self) -> bool {
        self.pending_cookies.is_some()
    }

    pub fn is_timer_armed(&self, timer: PaneTimer) -> bool {
        self.timers.is_armed(&timer)
    }

    /// Earliest deadline of any deferred step.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub(super) fn allocate_ticket(&mut self, purpose: ScriptPurpose) -> ScriptTicket {
        self.next_ticket += 1;
        let ticket = ScriptTicket(self.next_ticket);
        self.scripts.insert(ticket, purpose);
        ticket
    }

    pub(super) fn arm(&mut self, timer: PaneTimer, delay: std::time::Duration) {
        self.timers.arm(timer, self.now, delay);
    }
}
