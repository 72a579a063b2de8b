//! Tests for the JSON-file backed store.

use super::*;
use panegrid_common::{Rect, SlotIndex};
use serde_json::json;

fn open_temp() -> (tempfile::TempDir, FileStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().join("data")).unwrap();
    (dir, store)
}

#[test]
fn empty_store_has_no_sub_windows() {
    let (_dir, store) = open_temp();
    assert!(store.ordered_sub_windows().unwrap().is_empty());
    assert!(store.root().join("cookies").is_dir());
}

#[test]
fn add_assigns_increasing_ids_in_order() {
    let (_dir, store) = open_temp();
    let a = store.add_sub_window("Mail", "mail.test").unwrap();
    let b = store.add_sub_window("Docs", "https://docs.test").unwrap();
    assert_eq!(a.id, SubWindowId(1));
    assert_eq!(b.id, SubWindowId(2));

    let names: Vec<_> = store
        .ordered_sub_windows()
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["Mail", "Docs"]);
}

#[test]
fn disabled_sub_windows_are_not_ordered() {
    let (_dir, store) = open_temp();
    store.add_sub_window("A", "a.test").unwrap();
    let b = store.add_sub_window("B", "b.test").unwrap();
    store.set_enabled(b.id, false).unwrap();

    assert_eq!(store.ordered_sub_windows().unwrap().len(), 1);
    assert_eq!(store.all_sub_windows().unwrap().len(), 2);
}

#[test]
fn remove_deletes_config_and_cookies() {
    let (_dir, store) = open_temp();
    let a = store.add_sub_window("A", "a.test").unwrap();
    store
        .save_window_config(&WindowConfigRecord {
            sub_window_id: a.id,
            url: "https://a.test".into(),
            title: "A".into(),
            geometry: Rect::default(),
        })
        .unwrap();
    store.save_cookie_blob(a.id, "[]").unwrap();

    store.remove_sub_window(a.id).unwrap();
    assert!(store.all_sub_windows().unwrap().is_empty());
    assert_eq!(store.window_config(a.id).unwrap(), None);
    assert!(!store.cookie_path(a.id).exists());
}

#[test]
fn remove_unknown_id_is_not_found() {
    let (_dir, store) = open_temp();
    let err = store.remove_sub_window(SubWindowId(9)).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(SubWindowId(9))));
}

#[test]
fn cookie_blob_is_stored_verbatim_per_id() {
    let (_dir, store) = open_temp();
    let blob = r#"[{"name":"sid","value":"1","domain":"a.test","path":"/"}]"#;
    store.save_cookie_blob(SubWindowId(4), blob).unwrap();

    assert_eq!(store.cookie_blob(SubWindowId(4)).unwrap().as_deref(), Some(blob));
    assert_eq!(store.cookie_blob(SubWindowId(5)).unwrap(), None);
    assert!(store
        .cookie_path(SubWindowId(4))
        .ends_with("cookies/cookies_4.json"));
}

#[test]
fn deleting_missing_cookie_blob_is_ok() {
    let (_dir, store) = open_temp();
    assert!(store.delete_cookie_blob(SubWindowId(1)).is_ok());
}

#[test]
fn settings_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = FileStore::open(dir.path()).unwrap();
        store.set_setting("windowColumns", json!(3)).unwrap();
    }
    let store = FileStore::open(dir.path()).unwrap();
    assert_eq!(store.setting("windowColumns").unwrap(), Some(json!(3)));
    assert_eq!(store.setting("missing").unwrap(), None);
}

#[test]
fn corrupt_settings_file_is_an_encoding_error() {
    let (_dir, store) = open_temp();
    std::fs::write(store.root().join("settings.json"), "{not json").unwrap();
    assert!(matches!(
        store.setting("windowColumns"),
        Err(StoreError::Encoding(_))
    ));
}

#[test]
fn visits_append_as_json_lines() {
    let (_dir, store) = open_temp();
    for url in ["https://a.test", "https://b.test"] {
        store
            .record_visit(&VisitRecord {
                url: url.into(),
                title: String::new(),
                slot: SlotIndex(1),
                sub_window_id: Some(SubWindowId(1)),
                visited_at: Utc::now(),
            })
            .unwrap();
    }
    let history = std::fs::read_to_string(store.root().join("history.jsonl")).unwrap();
    let lines: Vec<_> = history.lines().collect();
    assert_eq!(lines.len(), 2);
    let second: VisitRecord = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second.url, "https://b.test");
}
