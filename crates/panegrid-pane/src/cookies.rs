//! Page scripts for the cookie protocol.
//!
//! Cookies are read and written through `document.cookie` in the page,
//! never through the engine's own cookie store, which stays in-memory per
//! surface.

use panegrid_store::CookieRecord;

/// Returns `document.cookie` as a JSON array of `{name, value, domain, path}`.
///
/// `document.cookie` does not expose paths, so every entry is recorded
/// with path `/`.
pub const EXTRACT_COOKIES_SCRIPT: &str = r#"(function() {
    var out = [];
    var parts = document.cookie ? document.cookie.split(';') : [];
    for (var i = 0; i < parts.length; i++) {
        var entry = parts[i].trim();
        var eq = entry.indexOf('=');
        if (eq <= 0) { continue; }
        out.push({
            name: entry.substring(0, eq),
            value: entry.substring(eq + 1),
            domain: window.location.hostname,
            path: '/'
        });
    }
    return JSON.stringify(out);
})()"#;

/// Expires every visible cookie for the current host and its parent domain.
pub const EXPIRE_COOKIES_SCRIPT: &str = r#"(function() {
    var parts = document.cookie ? document.cookie.split(';') : [];
    var past = '=; expires=Thu, 01 Jan 1970 00:00:00 UTC; path=/';
    var host = window.location.hostname;
    for (var i = 0; i < parts.length; i++) {
        var entry = parts[i].trim();
        var eq = entry.indexOf('=');
        var name = eq > 0 ? entry.substring(0, eq) : entry;
        if (!name) { continue; }
        document.cookie = name + past;
        document.cookie = name + past + '; domain=' + host;
        document.cookie = name + past + '; domain=.' + host;
    }
    return 'cleared';
})()"#;

pub const CLEAR_STORAGE_SCRIPT: &str = r#"(function() {
    try {
        localStorage.clear();
        sessionStorage.clear();
        return 'cleared';
    } catch (e) {
        return 'error: ' + e.message;
    }
})()"#;

/// The `document.cookie` string that sets `record`.
pub fn cookie_assignment(record: &CookieRecord) -> String {
    let mut cookie = format!("{}={}", record.name, record.value);
    if !record.domain.is_empty() {
        cookie.push_str("; domain=");
        cookie.push_str(&record.domain);
    }
    if !record.path.is_empty() {
        cookie.push_str("; path=");
        cookie.push_str(&record.path);
    }
    cookie
}

/// One script that clears `document.cookie` and then sets every record.
///
/// Each assignment is embedded as a JSON string literal. `None` when
/// there is nothing to set.
pub fn injection_script(records: &[CookieRecord]) -> Option<String> {
    if records.is_empty() {
        return None;
    }
    let mut script = String::from("document.cookie = '';\n");
    for record in records {
        let literal = serde_json::Value::String(cookie_assignment(record)).to_string();
        script.push_str("document.cookie = ");
        script.push_str(&literal);
        script.push_str(";\n");
    }
    Some(script)
}

/// Assignments contained in a script built by [`injection_script`].
pub fn assignments_in(script: &str) -> Vec<String> {
    script
        .lines()
        .filter_map(|line| line.strip_prefix("document.cookie = "))
        .filter_map(|rest| rest.strip_suffix(';'))
        .filter_map(|literal| serde_json::from_str::<String>(literal).ok())
        .filter(|cookie| !cookie.is_empty())
        .collect()
}
