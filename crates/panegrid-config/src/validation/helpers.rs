//! Field checks shared by the section validators. Each pushes one error
//! naming the dotted TOML key, e.g. `pane.load_delay_ms`.

use std::fmt::Display;
use std::ops::RangeInclusive;

pub(crate) fn check_range<T>(errors: &mut Vec<String>, key: &str, value: T, allowed: RangeInclusive<T>)
where
    T: PartialOrd + Display,
{
    if !allowed.contains(&value) {
        errors.push(format!(
            "{key} = {value} must be within {}..={}",
            allowed.start(),
            allowed.end()
        ));
    }
}

pub(crate) fn check_http_url(errors: &mut Vec<String>, key: &str, value: &str) {
    if !(value.starts_with("https://") || value.starts_with("http://")) {
        errors.push(format!("{key} = {value:?} must be an http(s) URL"));
    }
}

pub(crate) fn check_not_blank(errors: &mut Vec<String>, key: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{key} must not be empty"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_bounds_are_inclusive() {
        let mut errors = Vec::new();
        check_range(&mut errors, "pool.size", 1u32, 1..=32);
        check_range(&mut errors, "pool.size", 32u32, 1..=32);
        assert!(errors.is_empty());

        check_range(&mut errors, "pane.load_delay_ms", 10_001u64, 0..=10_000);
        assert_eq!(errors, vec!["pane.load_delay_ms = 10001 must be within 0..=10000"]);
    }

    #[test]
    fn url_and_blank_checks_name_the_key() {
        let mut errors = Vec::new();
        check_http_url(&mut errors, "pane.search_endpoint", "https://s.test/?q=");
        check_not_blank(&mut errors, "pane.blank_destination", "about:blank");
        assert!(errors.is_empty());

        check_http_url(&mut errors, "pane.search_endpoint", "file:///q");
        check_not_blank(&mut errors, "pane.blank_destination", " ");
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("pane.search_endpoint"));
        assert!(errors[1].starts_with("pane.blank_destination"));
    }
}
