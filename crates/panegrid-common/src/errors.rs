use std::path::PathBuf;

use crate::types::{SlotIndex, SubWindowId};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("store encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("malformed cookie blob: {0}")]
    MalformedCookies(String),

    #[error("sub-window not found: {0}")]
    NotFound(SubWindowId),

    #[error("session store unavailable")]
    Unavailable,
}

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("render surface not ready")]
    NotReady,

    #[error("render engine error: {0}")]
    Engine(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("visible count {requested} is outside the supported range [0, {max}]")]
    InvalidVisibleCount { requested: usize, max: usize },

    #[error("column count {0} is outside the supported range [1, 3]")]
    InvalidColumnCount(u32),

    #[error("layout rebuild already in progress")]
    RebuildInProgress,

    #[error("{0} is not placed in the grid")]
    NotInGrid(SlotIndex),

    #[error("no pane at {0}")]
    UnknownSlot(SlotIndex),
}

#[derive(Debug, thiserror::Error)]
pub enum PanegridError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
