//! JSON-file backed session store.
//!
//! Layout under the data root:
//!
//! ```text
//! subwindows.json          ordered logical sub-windows
//! window_configs.json      {sub_window_id: WindowConfigRecord}
//! settings.json            {key: value}
//! history.jsonl            one VisitRecord per line
//! cookies/cookies_{id}.json
//! ```

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use panegrid_common::{LogicalSubWindow, StoreError, SubWindowId, WindowConfigRecord};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::cookies::cookie_file_name;
use crate::{SessionStore, VisitRecord};

#[cfg(test)]
mod tests;

const SUB_WINDOWS_FILE: &str = "subwindows.json";
const WINDOW_CONFIGS_FILE: &str = "window_configs.json";
const SETTINGS_FILE: &str = "settings.json";
const HISTORY_FILE: &str = "history.jsonl";
const COOKIE_DIR: &str = "cookies";

pub struct FileStore {
    root: PathBuf,
    // Serializes read-modify-write cycles on the JSON files.
    lock: Mutex<()>,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(root.join(COOKIE_DIR))?;
        info!(root = %root.display(), "session store opened");
        Ok(Self {
            root,
            lock: Mutex::new(()),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn cookie_path(&self, id: SubWindowId) -> PathBuf {
        self.root.join(COOKIE_DIR).join(cookie_file_name(id))
    }

    /// Every sub-window, enabled or not, in display order.
    pub fn all_sub_windows(&self) -> Result<Vec<LogicalSubWindow>, StoreError> {
        let _guard = self.guard();
        self.read_json(SUB_WINDOWS_FILE)
    }

    /// Append a new sub-window with the next free id.
    pub fn add_sub_window(
        &self,
        name: &str,
        url: &str,
    ) -> Result<LogicalSubWindow, StoreError> {
        let _guard = self.guard();
        let mut all: Vec<LogicalSubWindow> = self.read_json(SUB_WINDOWS_FILE)?;
        let next = all.iter().map(|s| s.id.0).max().unwrap_or(0) + 1;
        let record = LogicalSubWindow::new(SubWindowId(next), name, url);
        all.push(record.clone());
        self.write_json(SUB_WINDOWS_FILE, &all)?;
        info!(id = %record.id, name, "sub-window added");
        Ok(record)
    }

    /// Remove a sub-window along with its window config and cookie file.
    pub fn remove_sub_window(&self, id: SubWindowId) -> Result<(), StoreError> {
        {
            let _guard = self.guard();
            let mut all: Vec<LogicalSubWindow> = self.read_json(SUB_WINDOWS_FILE)?;
            let before = all.len();
            all.retain(|s| s.id != id);
            if all.len() == before {
                return Err(StoreError::NotFound(id));
            }
            self.write_json(SUB_WINDOWS_FILE, &all)?;

            let mut configs: BTreeMap<String, WindowConfigRecord> =
                self.read_json(WINDOW_CONFIGS_FILE)?;
            if configs.remove(&id.to_string()).is_some() {
                self.write_json(WINDOW_CONFIGS_FILE, &configs)?;
            }
        }
        self.delete_cookie_blob(id)?;
        info!(%id, "sub-window removed");
        Ok(())
    }

    pub fn set_enabled(&self, id: SubWindowId, enabled: bool) -> Result<(), StoreError> {
        let _guard = self.guard();
        let mut all: Vec<LogicalSubWindow> = self.read_json(SUB_WINDOWS_FILE)?;
        let record = all
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(StoreError::NotFound(id))?;
        record.enabled = enabled;
        record.updated_at = Utc::now();
        self.write_json(SUB_WINDOWS_FILE, &all)
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Read a JSON file, treating a missing file as the default value.
    fn read_json<T: DeserializeOwned + Default>(&self, name: &str) -> Result<T, StoreError> {
        let path = self.root.join(name);
        match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => Ok(T::default()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(T::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(value)?;
        write_atomic(&self.root.join(name), &text)
    }
}

/// Write through a sibling temp file so readers never see a partial file.
fn write_atomic(path: &Path, contents: &str) -> Result<(), StoreError> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

impl SessionStore for FileStore {
    fn ordered_sub_windows(&self) -> Result<Vec<LogicalSubWindow>, StoreError> {
        Ok(self
            .all_sub_windows()?
            .into_iter()
            .filter(|s| s.enabled)
            .collect())
    }

    fn window_config(&self, id: SubWindowId) -> Result<Option<WindowConfigRecord>, StoreError> {
        let _guard = self.guard();
        let configs: BTreeMap<String, WindowConfigRecord> = self.read_json(WINDOW_CONFIGS_FILE)?;
        Ok(configs.get(&id.to_string()).cloned())
    }

    fn save_window_config(&self, record: &WindowConfigRecord) -> Result<(), StoreError> {
        let _guard = self.guard();
        let mut configs: BTreeMap<String, WindowConfigRecord> =
            self.read_json(WINDOW_CONFIGS_FILE)?;
        configs.insert(record.sub_window_id.to_string(), record.clone());
        self.write_json(WINDOW_CONFIGS_FILE, &configs)
    }

    fn cookie_blob(&self, id: SubWindowId) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.cookie_path(id)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save_cookie_blob(&self, id: SubWindowId, blob: &str) -> Result<(), StoreError> {
        let path = self.cookie_path(id);
        write_atomic(&path, blob)?;
        debug!(%id, path = %path.display(), bytes = blob.len(), "cookie blob saved");
        Ok(())
    }

    fn delete_cookie_blob(&self, id: SubWindowId) -> Result<(), StoreError> {
        match fs::remove_file(self.cookie_path(id)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn setting(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        let _guard = self.guard();
        let settings: BTreeMap<String, serde_json::Value> = self.read_json(SETTINGS_FILE)?;
        Ok(settings.get(key).cloned())
    }

    fn set_setting(&self, key: &str, value: serde_json::Value) -> Result<(), StoreError> {
        let _guard = self.guard();
        let mut settings: BTreeMap<String, serde_json::Value> = self.read_json(SETTINGS_FILE)?;
        settings.insert(key.to_string(), value);
        self.write_json(SETTINGS_FILE, &settings)
    }

    fn record_visit(&self, visit: &VisitRecord) -> Result<(), StoreError> {
        let line = serde_json::to_string(visit)?;
        let _guard = self.guard();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.root.join(HISTORY_FILE))?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}
