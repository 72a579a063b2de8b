//! Session storage collaborator.
//!
//! The pane pool reads logical sub-windows, window configs, cookie blobs
//! and settings through [`SessionStore`]. Two implementations ship here:
//! [`FileStore`] keeps JSON files under a data directory, [`MemoryStore`]
//! keeps everything in process (tests and `storage.disabled`).

pub mod cookies;
mod file;
mod memory;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use panegrid_common::{LogicalSubWindow, SlotIndex, StoreError, SubWindowId, WindowConfigRecord};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use cookies::{cookie_file_name, encode_blob, parse_blob, CookieRecord};
pub use file::FileStore;
pub use memory::MemoryStore;

/// Settings key holding the grid column count.
pub const COLUMNS_SETTING: &str = "windowColumns";

/// One successful page load, appended to the visit history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub url: String,
    pub title: String,
    pub slot: SlotIndex,
    pub sub_window_id: Option<SubWindowId>,
    pub visited_at: DateTime<Utc>,
}

/// Key/record storage consumed by panes and the pool.
///
/// All methods take `&self`; implementations synchronize internally.
pub trait SessionStore: Send + Sync {
    /// Enabled logical sub-windows in display order.
    fn ordered_sub_windows(&self) -> Result<Vec<LogicalSubWindow>, StoreError>;

    fn window_config(&self, id: SubWindowId) -> Result<Option<WindowConfigRecord>, StoreError>;

    fn save_window_config(&self, record: &WindowConfigRecord) -> Result<(), StoreError>;

    /// Raw cookie blob for `id`, `None` when no file exists.
    fn cookie_blob(&self, id: SubWindowId) -> Result<Option<String>, StoreError>;

    fn save_cookie_blob(&self, id: SubWindowId, blob: &str) -> Result<(), StoreError>;

    fn delete_cookie_blob(&self, id: SubWindowId) -> Result<(), StoreError>;

    fn setting(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError>;

    fn set_setting(&self, key: &str, value: serde_json::Value) -> Result<(), StoreError>;

    fn record_visit(&self, _visit: &VisitRecord) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Shared handle; `None` anywhere a store is expected means degraded mode.
pub type SharedStore = Arc<dyn SessionStore>;

/// Read a typed setting, falling back to `default` when it is missing,
/// unreadable or of the wrong shape.
pub fn setting_or<T: DeserializeOwned>(store: &dyn SessionStore, key: &str, default: T) -> T {
    match store.setting(key) {
        Ok(Some(value)) => match serde_json::from_value(value) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(key, error = %e, "setting has unexpected type, using default");
                default
            }
        },
        Ok(None) => default,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read setting, using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn setting_or_returns_stored_value() {
        let store = MemoryStore::new();
        store.set_setting(COLUMNS_SETTING, json!(3)).unwrap();
        assert_eq!(setting_or(&store, COLUMNS_SETTING, 2u32), 3);
    }

    #[test]
    fn setting_or_falls_back_on_missing_or_mistyped() {
        let store = MemoryStore::new();
        assert_eq!(setting_or(&store, COLUMNS_SETTING, 2u32), 2);
        store.set_setting(COLUMNS_SETTING, json!("three")).unwrap();
        assert_eq!(setting_or(&store, COLUMNS_SETTING, 2u32), 2);
    }

    #[test]
    fn default_record_visit_is_a_no_op() {
        struct Minimal;
        impl SessionStore for Minimal {
            fn ordered_sub_windows(&self) -> Result<Vec<LogicalSubWindow>, StoreError> {
                Ok(Vec::new())
            }
            fn window_config(
                &self,
                _id: SubWindowId,
            ) -> Result<Option<WindowConfigRecord>, StoreError> {
                Ok(None)
            }
            fn save_window_config(&self, _record: &WindowConfigRecord) -> Result<(), StoreError> {
                Ok(())
            }
            fn cookie_blob(&self, _id: SubWindowId) -> Result<Option<String>, StoreError> {
                Ok(None)
            }
            fn save_cookie_blob(&self, _id: SubWindowId, _blob: &str) -> Result<(), StoreError> {
                Ok(())
            }
            fn delete_cookie_blob(&self, _id: SubWindowId) -> Result<(), StoreError> {
                Ok(())
            }
            fn setting(&self, _key: &str) -> Result<Option<serde_json::Value>, StoreError> {
                Ok(None)
            }
            fn set_setting(&self, _key: &str, _value: serde_json::Value) -> Result<(), StoreError> {
                Ok(())
            }
        }

        let visit = VisitRecord {
            url: "https://a.test".into(),
            title: "A".into(),
            slot: SlotIndex(1),
            sub_window_id: None,
            visited_at: Utc::now(),
        };
        assert!(Minimal.record_visit(&visit).is_ok());
    }
}
