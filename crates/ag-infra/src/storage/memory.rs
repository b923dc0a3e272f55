use ag_core::ports::{KeyValueStoragePort, StorageError, StorageItems};
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ensure_within_quota, normalize_quota, select_keys};

/// Process-local storage area, for tests and throwaway sessions.
#[derive(Default)]
pub struct InMemoryKeyValueStorage {
    items: RwLock<StorageItems>,
    quota_bytes: Option<u64>,
}

impl InMemoryKeyValueStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(mut self, quota_bytes: u64) -> Self {
        self.quota_bytes = normalize_quota(Some(quota_bytes));
        self
    }

    /// Snapshot of everything currently stored.
    pub async fn dump(&self) -> StorageItems {
        self.items.read().await.clone()
    }
}

#[async_trait]
impl KeyValueStoragePort for InMemoryKeyValueStorage {
    async fn get(&self, keys: &[&str]) -> Result<StorageItems, StorageError> {
        let items = self.items.read().await;
        Ok(select_keys(&items, keys))
    }

    async fn set(&self, items: StorageItems) -> Result<(), StorageError> {
        let mut guard = self.items.write().await;
        let mut next = guard.clone();
        next.extend(items);

        if self.quota_bytes.is_some() {
            let size = serde_json::to_vec(&next)
                .map_err(|e| StorageError::Serialization(e.to_string()))?
                .len();
            ensure_within_quota(size, self.quota_bytes)?;
        }

        *guard = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items(key: &str, value: serde_json::Value) -> StorageItems {
        let mut items = StorageItems::new();
        items.insert(key.to_string(), value);
        items
    }

    #[tokio::test]
    async fn get_of_unwritten_key_is_empty() {
        let storage = InMemoryKeyValueStorage::new();
        assert!(storage.get(&["commits"]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn set_replaces_only_listed_keys() {
        let storage = InMemoryKeyValueStorage::new();
        storage.set(items("a", json!([1]))).await.unwrap();
        storage.set(items("b", json!("x"))).await.unwrap();
        storage.set(items("a", json!([2, 3]))).await.unwrap();

        let all = storage.get(&["a", "b"]).await.unwrap();

        assert_eq!(all.get("a"), Some(&json!([2, 3])));
        assert_eq!(all.get("b"), Some(&json!("x")));
    }

    #[tokio::test]
    async fn write_over_quota_is_rejected_and_leaves_state_untouched() {
        let storage = InMemoryKeyValueStorage::new().with_quota(32);
        storage.set(items("a", json!("small"))).await.unwrap();

        let err = storage
            .set(items("a", json!("x".repeat(64))))
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::QuotaExceeded { quota: 32, .. }));
        assert_eq!(storage.dump().await.get("a"), Some(&json!("small")));
    }
}
