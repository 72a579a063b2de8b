//! On-disk cookie blob format: a UTF-8 JSON array of `{name, value, domain, path}`.

use panegrid_common::{StoreError, SubWindowId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieRecord {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default = "root_path")]
    pub path: String,
}

fn root_path() -> String {
    "/".into()
}

/// Deterministic cookie file name for a logical sub-window.
pub fn cookie_file_name(id: SubWindowId) -> String {
    format!("cookies_{id}.json")
}

/// Parse a cookie blob. Blank text is an empty jar; anything that is not
/// an array of cookie objects is rejected.
pub fn parse_blob(text: &str) -> Result<Vec<CookieRecord>, StoreError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| StoreError::MalformedCookies(e.to_string()))?;
    if !value.is_array() {
        return Err(StoreError::MalformedCookies("expected a JSON array".into()));
    }
    let records: Vec<CookieRecord> =
        serde_json::from_value(value).map_err(|e| StoreError::MalformedCookies(e.to_string()))?;
    Ok(records.into_iter().filter(|c| !c.name.is_empty()).collect())
}

pub fn encode_blob(records: &[CookieRecord]) -> Result<String, StoreError> {
    Ok(serde_json::to_string(records)?)
}
