//! Persisted state and the cookie save/load protocol.

use chrono::Utc;
use panegrid_common::{StoreError, WindowConfigRecord};
use panegrid_store::{parse_blob, SessionStore, VisitRecord};
use panegrid_surface::ScriptTicket;
use tracing::{debug, info, warn};

use super::types::{LoadState, Pane, PaneTimer, PendingCookieScript, ScriptPurpose};
use crate::cookies::{self, injection_script};
use crate::destination::is_web_destination;

impl Pane {
    fn store_or_warn(&self, operation: &'static str) -> Option<&dyn SessionStore> {
        let store = self.store.as_deref();
        if store.is_none() {
            warn!(slot = %self.slot, operation, "session store unavailable, skipping");
        }
        store
    }

    /// The pane's own dispatched load has finished on a web page and
    /// nothing is loading.
    pub(super) fn page_settled(&self) -> bool {
        self.load_state == LoadState::Finished
            && self.surface.is_ready()
            && !self.surface.is_loading()
            && self
                .surface
                .page_url()
                .is_some_and(|url| is_web_destination(&url))
    }

    /// Persist geometry and, when identified, the window config keyed by
    /// the logical id. Also saves cookies.
    pub fn save_state(&mut self) {
        let Some(store) = self.store_or_warn("save_state") else {
            return;
        };
        if let Some(id) = self.sub_window_id {
            let url = if self.current_url.is_empty() {
                self.destination.clone()
            } else {
                self.current_url.clone()
            };
            let record = WindowConfigRecord {
                sub_window_id: id,
                url,
                title: self.title.clone(),
                geometry: self.bounds,
            };
            if let Err(e) = store.save_window_config(&record) {
                warn!(slot = %self.slot, sub_window_id = %id, error = %e, "failed to save window config");
            }
        }
        self.save_cookies();
    }

    /// Restore the bound sub-window's destination, then stage its cookies.
    pub fn load_state(&mut self) {
        let Some(store) = self.store_or_warn("load_state") else {
            return;
        };
        let Some(id) = self.sub_window_id else {
            return;
        };
        let from_sub_window = match store.ordered_sub_windows() {
            Ok(list) => list.into_iter().find(|s| s.id == id).map(|s| s.url),
            Err(e) => {
                warn!(slot = %self.slot, error = %e, "failed to read sub-windows");
                None
            }
        };
        let config = match store.window_config(id) {
            Ok(config) => config,
            Err(e) => {
                warn!(slot = %self.slot, sub_window_id = %id, error = %e, "failed to read window config");
                None
            }
        };
        if let Some(config) = &config {
            if self.bounds.size().is_empty() {
                self.bounds = config.geometry;
            }
            if self.title.is_empty() {
                self.title = config.title.clone();
            }
        }
        let url = from_sub_window
            .filter(|u| !u.trim().is_empty())
            .or_else(|| config.map(|c| c.url).filter(|u| !u.is_empty()));
        if let Some(url) = url {
            self.set_destination(&url);
        }
        self.load_cookies();
    }

    /// Request cookie extraction from the current page. The result is
    /// written to the file of the id bound now.
    pub fn save_cookies(&mut self) {
        let Some(owner) = self.sub_window_id else {
            return;
        };
        if self.store.is_none() {
            return;
        }
        if !self.in_layout {
            debug!(slot = %self.slot, sub_window_id = %owner, "pane outside the layout, cookie save skipped");
            return;
        }
        if !self.page_settled() {
            debug!(slot = %self.slot, sub_window_id = %owner, "page not settled, cookie save skipped");
            return;
        }
        let ticket = self.allocate_ticket(ScriptPurpose::SaveCookies { owner });
        if !self.surface_call("extract_cookies", |s| {
            s.run_script(cookies::EXTRACT_COOKIES_SCRIPT, Some(ticket))
        }) {
            self.scripts.remove(&ticket);
        }
    }

    /// Cancel the scheduled cookie save and forget extractions still in
    /// flight; their results are ignored when they arrive.
    pub(super) fn drop_cookie_saves(&mut self) {
        self.timers.cancel(&PaneTimer::CookieSave);
        self.scripts
            .retain(|_, purpose| !matches!(purpose, ScriptPurpose::SaveCookies { .. }));
    }

    /// Read the bound id's cookie file and stage the injection script.
    pub fn load_cookies(&mut self) {
        let Some(id) = self.sub_window_id else {
            return;
        };
        let Some(store) = self.store_or_warn("load_cookies") else {
            return;
        };
        let blob = match store.cookie_blob(id) {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                debug!(slot = %self.slot, sub_window_id = %id, "no saved cookies");
                return;
            }
            Err(e) => {
                warn!(slot = %self.slot, sub_window_id = %id, error = %e, "failed to read cookies");
                return;
            }
        };
        let records = match parse_blob(&blob) {
            Ok(records) => records,
            Err(e) => {
                warn!(slot = %self.slot, sub_window_id = %id, error = %e, "ignoring malformed cookie file");
                return;
            }
        };
        let Some(script) = injection_script(&records) else {
            return;
        };
        if self.page_settled() {
            debug!(slot = %self.slot, sub_window_id = %id, count = records.len(), "injecting cookies now");
            self.pending_cookies = None;
            self.surface_call("inject_cookies", |s| s.run_script(&script, None));
            return;
        }
        let bound_dispatch =
            (self.load_state == LoadState::Dispatched).then_some(self.dispatch_generation);
        debug!(slot = %self.slot, sub_window_id = %id, count = records.len(), "cookie script staged");
        self.pending_cookies = Some(PendingCookieScript {
            owner: id,
            script,
            bound_dispatch,
        });
    }

    /// Run the staged cookie script if it belongs to the load that just
    /// finished. Called on a successful load-finished of our own dispatch.
    pub(super) fn flush_pending_cookies(&mut self) {
        let Some(pending) = self.pending_cookies.take() else {
            return;
        };
        if pending.bound_dispatch != Some(self.dispatch_generation) {
            self.pending_cookies = Some(pending);
            return;
        }
        if Some(pending.owner) != self.sub_window_id {
            debug!(slot = %self.slot, owner = %pending.owner, "dropping cookie script of a previous identity");
            return;
        }
        debug!(slot = %self.slot, sub_window_id = %pending.owner, "injecting staged cookies");
        self.surface_call("inject_cookies", |s| s.run_script(&pending.script, None));
    }

    /// Log out: expire page cookies, clear the engine cookie store and web
    /// storage, delete the cookie file, then reload.
    pub fn clear_login_state(&mut self) {
        info!(slot = %self.slot, sub_window_id = ?self.sub_window_id, "clearing login state");
        self.pending_cookies = None;
        self.timers.cancel(&PaneTimer::CookieSave);
        self.surface_call("expire_cookies", |s| {
            s.run_script(cookies::EXPIRE_COOKIES_SCRIPT, None)
        });
        self.surface_call("clear_cookie_store", |s| s.clear_cookie_store());
        if let Some(id) = self.sub_window_id {
            if let Some(store) = self.store_or_warn("clear_login_state") {
                if let Err(e) = store.delete_cookie_blob(id) {
                    warn!(slot = %self.slot, sub_window_id = %id, error = %e, "failed to delete cookie file");
                }
            }
        }
        self.surface_call("clear_storage", |s| {
            s.run_script(cookies::CLEAR_STORAGE_SCRIPT, None)
        });
        self.refresh();
    }

    pub(super) fn handle_script_result(&mut self, ticket: ScriptTicket, value: String) {
        let Some(purpose) = self.scripts.remove(&ticket) else {
            return;
        };
        match purpose {
            ScriptPurpose::SaveCookies { owner } => {
                let Some(store) = self.store.as_deref() else {
                    return;
                };
                let result = parse_blob(&value)
                    .and_then(|_| store.save_cookie_blob(owner, &value));
                match result {
                    Ok(()) => debug!(slot = %self.slot, sub_window_id = %owner, "cookies saved"),
                    Err(StoreError::MalformedCookies(reason)) => {
                        warn!(slot = %self.slot, sub_window_id = %owner, reason = %reason, "extracted cookies were not a JSON array");
                    }
                    Err(e) => {
                        warn!(slot = %self.slot, sub_window_id = %owner, error = %e, "failed to write cookies");
                    }
                }
            }
        }
    }

    pub(super) fn record_visit(&self) {
        let Some(store) = self.store.as_deref() else {
            return;
        };
        if !is_web_destination(&self.current_url) {
            return;
        }
        let visit = VisitRecord {
            url: self.current_url.clone(),
            title: self.title.clone(),
            slot: self.slot,
            sub_window_id: self.sub_window_id,
            visited_at: Utc::now(),
        };
        if let Err(e) = store.record_visit(&visit) {
            warn!(slot = %self.slot, error = %e, "failed to record visit");
        }
    }

    /// Final save before the pane is torn down.
    pub fn shutdown(&mut self) {
        if self.store.is_some() {
            self.save_state();
        }
        self.release();
    }

    /// Drop every deferred step and staged script without saving.
    pub fn release(&mut self) {
        self.timers.clear();
        self.scripts.clear();
        self.pending_cookies = None;
        debug!(slot = %self.slot, "pane released");
    }
}
