use std::fs;

use devmode_host::{load_host_entries, JsonFileStorage, LocalStorage, MemoryStorage, StorageError};
use serde_json::json;
use tempfile::TempDir;

#[test]
fn missing_item_yields_no_entries() {
    let storage = MemoryStorage::new();
    let entries = load_host_entries(&storage, "GWT_DEV_HOSTENTRY").unwrap();
    assert!(entries.is_empty());
}

#[test]
fn array_item_is_split_into_entries() {
    let storage = MemoryStorage::new().with_item("K", r#"["a", {"b": 1}, 3]"#);
    let entries = load_host_entries(&storage, "K").unwrap();
    assert_eq!(entries, vec![json!("a"), json!({"b": 1}), json!(3)]);
}

#[test]
fn non_array_item_is_rejected() {
    let storage = MemoryStorage::new().with_item("K", r#"{"a": 1}"#);
    let err = load_host_entries(&storage, "K").unwrap_err();
    assert!(matches!(err, StorageError::NotAnArray { key } if key == "K"));
}

#[test]
fn stored_null_yields_no_entries() {
    let storage = MemoryStorage::new().with_item("K", "null");
    let entries = load_host_entries(&storage, "K").unwrap();
    assert!(entries.is_empty());
}

#[test]
fn empty_string_item_is_malformed() {
    let storage = MemoryStorage::new().with_item("K", "");
    let err = load_host_entries(&storage, "K").unwrap_err();
    assert!(matches!(err, StorageError::MalformedEntries { .. }));
}

#[test]
fn file_storage_missing_file_is_empty() {
    let temp = TempDir::new().unwrap();
    let storage = JsonFileStorage::new(temp.path().join("local_storage.json"));
    assert_eq!(storage.get_item("GWT_DEV_HOSTENTRY").unwrap(), None);
}

#[test]
fn file_storage_reads_string_values() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("local_storage.json");
    fs::write(
        &path,
        r#"{"GWT_DEV_HOSTENTRY": "[{\"url\":\"example.com\",\"include\":true}]", "other": "x"}"#,
    )
    .unwrap();
    let storage = JsonFileStorage::new(&path);

    assert_eq!(storage.get_item("other").unwrap().as_deref(), Some("x"));
    let entries = load_host_entries(&storage, "GWT_DEV_HOSTENTRY").unwrap();
    assert_eq!(entries, vec![json!({"url": "example.com", "include": true})]);
}

#[test]
fn file_storage_picks_up_rewrites() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("local_storage.json");
    let storage = JsonFileStorage::new(&path);

    fs::write(&path, r#"{"K": "[]"}"#).unwrap();
    assert_eq!(storage.get_item("K").unwrap().as_deref(), Some("[]"));

    fs::write(&path, r#"{"K": "[1]"}"#).unwrap();
    assert_eq!(storage.get_item("K").unwrap().as_deref(), Some("[1]"));
}

#[test]
fn file_storage_rejects_non_object_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("local_storage.json");
    fs::write(&path, "[1, 2]").unwrap();
    let storage = JsonFileStorage::new(&path);

    let err = storage.get_item("K").unwrap_err();
    assert!(matches!(err, StorageError::Read { .. }));
}
