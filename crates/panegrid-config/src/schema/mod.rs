//! Configuration schema types for PaneGrid.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod layout;
mod pane;
mod system;

pub use layout::*;
pub use pane::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for PaneGrid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PanegridConfig {
    pub pool: PoolConfig,
    pub layout: LayoutConfig,
    pub pane: PaneConfig,
    pub controls: ControlsConfig,
    pub fullscreen: FullscreenConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub window: WindowConfig,
}

// =============================================================================
// Tests
// =============================================================================
