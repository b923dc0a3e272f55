//! File-backed storage area: persistence across instances, atomic writes
//! and quota handling.

use ag_core::ports::{KeyValueStoragePort, StorageError, StorageItems};
use ag_infra::FileKeyValueStorage;
use serde_json::json;
use tempfile::TempDir;

fn items(key: &str, value: serde_json::Value) -> StorageItems {
    let mut items = StorageItems::new();
    items.insert(key.to_string(), value);
    items
}

#[tokio::test]
async fn missing_file_reads_as_empty_area() {
    let dir = TempDir::new().unwrap();
    let storage = FileKeyValueStorage::new(dir.path().join("storage.json"));

    let got = storage.get(&["commits"]).await.unwrap();

    assert!(got.is_empty());
}

#[tokio::test]
async fn values_survive_a_new_instance() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("storage.json");

    FileKeyValueStorage::new(&path)
        .set(items("commits", json!([{"id": "1"}])))
        .await
        .unwrap();

    let reopened = FileKeyValueStorage::new(&path);
    let got = reopened.get(&["commits"]).await.unwrap();

    assert_eq!(got.get("commits"), Some(&json!([{"id": "1"}])));
}

#[tokio::test]
async fn set_keeps_unrelated_keys() {
    let dir = TempDir::new().unwrap();
    let storage = FileKeyValueStorage::new(dir.path().join("storage.json"));

    storage.set(items("other", json!(true))).await.unwrap();
    storage.set(items("commits", json!([]))).await.unwrap();

    let got = storage.get(&["other", "commits"]).await.unwrap();
    assert_eq!(got.get("other"), Some(&json!(true)));
    assert_eq!(got.get("commits"), Some(&json!([])));
}

#[tokio::test]
async fn write_leaves_no_temp_file_behind() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    let storage = FileKeyValueStorage::new(&path);

    storage.set(items("commits", json!([]))).await.unwrap();

    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());
}

#[tokio::test]
async fn quota_exceeded_keeps_previous_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    let storage = FileKeyValueStorage::new(&path).with_quota(64);

    storage.set(items("commits", json!(["a"]))).await.unwrap();
    let err = storage
        .set(items("commits", json!(["b".repeat(128)])))
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::QuotaExceeded { quota: 64, .. }));
    let got = storage.get(&["commits"]).await.unwrap();
    assert_eq!(got.get("commits"), Some(&json!(["a"])));
}

#[tokio::test]
async fn malformed_file_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "not json").unwrap();

    let err = FileKeyValueStorage::new(&path)
        .get(&["commits"])
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::Serialization(_)));
}

#[tokio::test]
async fn non_object_root_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let err = FileKeyValueStorage::new(&path)
        .get(&["commits"])
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::Serialization(_)));
}
