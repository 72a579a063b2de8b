//! Core types and constructor for PanePool.

use std::convert::Infallible;
use std::time::{Duration, Instant};

use panegrid_common::{EventBus, SlotIndex, TimerWheel};
use panegrid_config::PanegridConfig;
use panegrid_pane::{Pane, PaneSettings};
use panegrid_store::SharedStore;
use panegrid_surface::RenderSurface;
use tracing::info;

use crate::layout::GridGeometry;

/// Upper bound on grid columns.
pub const MAX_COLUMNS: u32 = 3;

/// Whether a structural rebuild is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPhase {
    Idle,
    AssigningLayout,
}

/// Which container the host is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Grid,
    /// Only this pane is shown; the grid is hidden.
    Fullscreen(SlotIndex),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) enum PoolTimer {
    Autosave,
}

/// Construction parameters for a [`PanePool`].
#[derive(Debug, Clone)]
pub struct PoolOptions {
    pub size: usize,
    pub columns: u32,
    pub autosave_interval: Duration,
    pub geometry: GridGeometry,
    pub pane: PaneSettings,
}

impl PoolOptions {
    pub fn from_config(config: &PanegridConfig) -> Self {
        Self {
            size: config.pool.size as usize,
            columns: config.pool.default_columns.clamp(1, MAX_COLUMNS),
            autosave_interval: Duration::from_secs(config.pool.autosave_interval_secs),
            geometry: GridGeometry::from_config(&config.layout),
            pane: PaneSettings::from_config(config),
        }
    }
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self::from_config(&PanegridConfig::default())
    }
}

/// Fixed set of panes shown as a row-major grid.
///
/// Panes are created once and never destroyed; layout changes only show,
/// hide and reposition them so each surface keeps its history and any
/// in-flight load.
pub struct PanePool {
    pub(super) panes: Vec<Pane>,
    pub(super) store: Option<SharedStore>,
    pub(super) geometry: GridGeometry,
    pub(super) columns: u32,
    pub(super) visible_count: usize,
    /// Grid rows of slot indices; excludes a detached pane.
    pub(super) rows: Vec<Vec<SlotIndex>>,
    pub(super) phase: LayoutPhase,
    /// Pane lifted out of the grid by the fullscreen coordinator.
    pub(super) detached: Option<SlotIndex>,
    pub(super) stage: Stage,
    /// Vertical scroll of the grid canvas, within `0..=max_scroll()`.
    pub(super) scroll_offset: f64,
    pub(super) viewport_height: Option<f64>,
    pub(super) autosave_interval: Duration,
    pub(super) timers: TimerWheel<PoolTimer>,
    pub(super) bus: EventBus,
    pub(super) now: Instant,
    pub(super) shut_down: bool,
}

impl PanePool {
    /// Build `options.size` hidden, unassigned panes. `make_surface` is
    /// called once per slot, in slot order.
    pub fn new(
        options: PoolOptions,
        store: Option<SharedStore>,
        bus: EventBus,
        now: Instant,
        mut make_surface: impl FnMut(SlotIndex) -> Box<dyn RenderSurface>,
    ) -> Self {
        match Self::try_new(options, store, bus, now, |slot| {
            Ok::<_, Infallible>(make_surface(slot))
        }) {
            Ok(pool) => pool,
            Err(never) => match never {},
        }
    }

    /// Like [`PanePool::new`], stopping at the first surface that fails
    /// to build.
    pub fn try_new<E>(
        options: PoolOptions,
        store: Option<SharedStore>,
        bus: EventBus,
        now: Instant,
        mut make_surface: impl FnMut(SlotIndex) -> Result<Box<dyn RenderSurface>, E>,
    ) -> Result<Self, E> {
        let panes = (0..options.size)
            .map(|position| -> Result<Pane, E> {
                let slot = SlotIndex::from_position(position);
                Ok(Pane::new(
                    slot,
                    make_surface(slot)?,
                    store.clone(),
                    options.pane.clone(),
                    now,
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut timers = TimerWheel::new();
        if store.is_some() {
            timers.arm(PoolTimer::Autosave, now, options.autosave_interval);
        }
        info!(size = options.size, columns = options.columns, "pane pool created");

        Ok(Self {
            panes,
            store,
            geometry: options.geometry,
            columns: options.columns.clamp(1, MAX_COLUMNS),
            visible_count: 0,
            rows: Vec::new(),
            phase: LayoutPhase::Idle,
            detached: None,
            stage: Stage::Grid,
            scroll_offset: 0.0,
            viewport_height: None,
            autosave_interval: options.autosave_interval,
            timers,
            bus,
            now,
            shut_down: false,
        })
    }

    // -- Accessors --

    /// Number of pooled panes; fixed for the pool's lifetime.
    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn column_count(&self) -> u32 {
        self.columns
    }

    pub fn phase(&self) -> LayoutPhase {
        self.phase
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn rows(&self) -> &[Vec<SlotIndex>] {
        &self.rows
    }

    pub fn detached(&self) -> Option<SlotIndex> {
        self.detached
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn pane(&self, slot: SlotIndex) -> Option<&Pane> {
        self.panes.get(slot.position())
    }

    pub fn pane_mut(&mut self, slot: SlotIndex) -> Option<&mut Pane> {
        self.panes.get_mut(slot.position())
    }

    pub fn panes(&self) -> impl Iterator<Item = &Pane> {
        self.panes.iter()
    }

    /// Slots currently part of the layout: the grid plus a detached pane.
    pub fn active_slots(&self) -> Vec<SlotIndex> {
        let mut slots: Vec<SlotIndex> = self.rows.iter().flatten().copied().collect();
        if let Some(detached) = self.detached {
            slots.push(detached);
        }
        slots
    }

    /// Row-major grid position of `slot`.
    pub fn position_of(&self, slot: SlotIndex) -> Option<usize> {
        let columns = self.columns as usize;
        self.rows.iter().enumerate().find_map(|(row, slots)| {
            slots
                .iter()
                .position(|s| *s == slot)
                .map(|col| row * columns + col)
        })
    }

    /// Earliest deadline of any pane or pool timer.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.panes
            .iter()
            .filter_map(Pane::next_deadline)
            .chain(self.timers.next_deadline())
            .min()
    }
}
