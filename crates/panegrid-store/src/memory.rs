use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use panegrid_common::{LogicalSubWindow, StoreError, SubWindowId, WindowConfigRecord};

use crate::{SessionStore, VisitRecord};

#[derive(Default)]
struct MemoryState {
    sub_windows: Vec<LogicalSubWindow>,
    configs: HashMap<SubWindowId, WindowConfigRecord>,
    cookies: HashMap<SubWindowId, String>,
    settings: HashMap<String, serde_json::Value>,
    visits: Vec<VisitRecord>,
    failing_writes: bool,
}

/// In-process store. Nothing survives the process.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sub_windows(sub_windows: Vec<LogicalSubWindow>) -> Self {
        let store = Self::new();
        store.state().sub_windows = sub_windows;
        store
    }

    pub fn set_sub_windows(&self, sub_windows: Vec<LogicalSubWindow>) {
        self.state().sub_windows = sub_windows;
    }

    /// Make every write fail with an I/O error.
    pub fn set_failing_writes(&self, failing: bool) {
        self.state().failing_writes = failing;
    }

    pub fn visits(&self) -> Vec<VisitRecord> {
        self.state().visits.clone()
    }

    pub fn has_cookie_blob(&self, id: SubWindowId) -> bool {
        self.state().cookies.contains_key(&id)
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn writable(&self) -> Result<MutexGuard<'_, MemoryState>, StoreError> {
        let state = self.state();
        if state.failing_writes {
            return Err(StoreError::Io(std::io::Error::other(
                "memory store writes disabled",
            )));
        }
        Ok(state)
    }
}

impl SessionStore for MemoryStore {
    fn ordered_sub_windows(&self) -> Result<Vec<LogicalSubWindow>, StoreError> {
        Ok(self
            .state()
            .sub_windows
            .iter()
            .filter(|s| s.enabled)
            .cloned()
            .collect())
    }

    fn window_config(&self, id: SubWindowId) -> Result<Option<WindowConfigRecord>, StoreError> {
        Ok(self.state().configs.get(&id).cloned())
    }

    fn save_window_config(&self, record: &WindowConfigRecord) -> Result<(), StoreError> {
        self.writable()?
            .configs
            .insert(record.sub_window_id, record.clone());
        Ok(())
    }

    fn cookie_blob(&self, id: SubWindowId) -> Result<Option<String>, StoreError> {
        Ok(self.state().cookies.get(&id).cloned())
    }

    fn save_cookie_blob(&self, id: SubWindowId, blob: &str) -> Result<(), StoreError> {
        self.writable()?.cookies.insert(id, blob.to_string());
        Ok(())
    }

    fn delete_cookie_blob(&self, id: SubWindowId) -> Result<(), StoreError> {
        self.writable()?.cookies.remove(&id);
        Ok(())
    }

    fn setting(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        Ok(self.state().settings.get(key).cloned())
    }

    fn set_setting(&self, key: &str, value: serde_json::Value) -> Result<(), StoreError> {
        self.writable()?.settings.insert(key.to_string(), value);
        Ok(())
    }

    fn record_visit(&self, visit: &VisitRecord) -> Result<(), StoreError> {
        self.writable()?.visits.push(visit.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panegrid_common::Rect;

    #[test]
    fn ordered_sub_windows_skips_disabled() {
        let mut hidden = LogicalSubWindow::new(SubWindowId(2), "Hidden", "b.test");
        hidden.enabled = false;
        let store = MemoryStore::with_sub_windows(vec![
            LogicalSubWindow::new(SubWindowId(1), "A", "a.test"),
            hidden,
            LogicalSubWindow::new(SubWindowId(3), "C", "c.test"),
        ]);
        let ids: Vec<_> = store
            .ordered_sub_windows()
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![SubWindowId(1), SubWindowId(3)]);
    }

    #[test]
    fn window_config_is_keyed_by_sub_window_id() {
        let store = MemoryStore::new();
        let record = WindowConfigRecord {
            sub_window_id: SubWindowId(5),
            url: "https://e.test".into(),
            title: "E".into(),
            geometry: Rect::new(0.0, 0.0, 500.0, 300.0),
        };
        store.save_window_config(&record).unwrap();
        assert_eq!(store.window_config(SubWindowId(5)).unwrap(), Some(record));
        assert_eq!(store.window_config(SubWindowId(6)).unwrap(), None);
    }

    #[test]
    fn failing_writes_surface_io_errors() {
        let store = MemoryStore::new();
        store.set_failing_writes(true);
        let err = store.save_cookie_blob(SubWindowId(1), "[]").unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
        assert!(!store.has_cookie_blob(SubWindowId(1)));
    }

    #[test]
    fn delete_cookie_blob_removes_entry() {
        let store = MemoryStore::new();
        store.save_cookie_blob(SubWindowId(1), "[]").unwrap();
        store.delete_cookie_blob(SubWindowId(1)).unwrap();
        assert_eq!(store.cookie_blob(SubWindowId(1)).unwrap(), None);
    }
}
