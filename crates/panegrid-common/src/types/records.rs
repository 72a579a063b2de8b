//! Records owned by the session store and read by the layout engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::core::{Rect, SubWindowId};

/// A user-configured browsing target, independent of the pane showing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalSubWindow {
    pub id: SubWindowId,
    pub name: String,
    pub url: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

fn default_enabled() -> bool {
    true
}

impl LogicalSubWindow {
    pub fn new(id: SubWindowId, name: impl Into<String>, url: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            url: url.into(),
            enabled: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Last known state of a pane, keyed 1:1 by its logical sub-window id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfigRecord {
    pub sub_window_id: SubWindowId,
    pub url: String,
    pub title: String,
    pub geometry: Rect,
}
