//! Destination normalization.
//!
//! User input becomes something the render surface can load:
//!
//! - empty (after trimming) -> the blank placeholder
//! - `http://` / `https://` and `about:` URLs -> unchanged
//! - bare domains such as `example.com` -> `https://` prefixed
//! - anything else -> a search query against the search endpoint

use std::sync::LazyLock;

use regex::Regex;

static ABSOLUTE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").unwrap());

static BARE_DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9-]{1,61}[a-zA-Z0-9]\.[a-zA-Z]{2,}$").unwrap()
});

pub fn normalize_destination(input: &str, search_endpoint: &str, blank: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        return blank.to_string();
    }
    if ABSOLUTE_URL_RE.is_match(input) || input.starts_with("about:") {
        return input.to_string();
    }
    if BARE_DOMAIN_RE.is_match(input) {
        return format!("https://{input}");
    }
    format!("{search_endpoint}{}", urlencoding::encode(input))
}

/// Whether `url` is a page cookies can live on.
pub fn is_web_destination(url: &str) -> bool {
    ABSOLUTE_URL_RE.is_match(url)
}
