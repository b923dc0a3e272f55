use std::path::{Path, PathBuf};

use ag_core::ports::{KeyValueStoragePort, StorageError, StorageItems};
use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;

use super::{ensure_within_quota, normalize_quota, select_keys};

/// Storage area persisted as a single JSON object in a file.
///
/// Writes go to a sibling temp file first and are renamed over the target,
/// so readers see either the previous or the new contents, never a mix.
pub struct FileKeyValueStorage {
    path: PathBuf,
    quota_bytes: Option<u64>,
}

impl FileKeyValueStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            quota_bytes: None,
        }
    }

    /// Limits the serialized size of the storage area; `0` lifts the limit.
    pub fn with_quota(mut self, quota_bytes: u64) -> Self {
        self.quota_bytes = normalize_quota(Some(quota_bytes));
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<StorageItems, StorageError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(StorageItems::new());
            }
            Err(e) => {
                return Err(StorageError::Io(format!(
                    "read storage failed: {}: {e}",
                    self.path.display()
                )))
            }
        };

        if content.trim().is_empty() {
            return Ok(StorageItems::new());
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(items)) => Ok(items),
            Ok(_) => Err(StorageError::Serialization(format!(
                "storage root is not an object: {}",
                self.path.display()
            ))),
            Err(e) => Err(StorageError::Serialization(format!(
                "parse storage failed: {}: {e}",
                self.path.display()
            ))),
        }
    }

    async fn ensure_parent_dir(&self) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).await.map_err(|e| {
                StorageError::Io(format!("create storage dir failed: {}: {e}", dir.display()))
            })?;
        }
        Ok(())
    }

    async fn atomic_write(&self, content: &str) -> Result<(), StorageError> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content).await.map_err(|e| {
            StorageError::Io(format!("write temp storage failed: {}: {e}", tmp_path.display()))
        })?;

        fs::rename(&tmp_path, &self.path).await.map_err(|e| {
            StorageError::Io(format!(
                "rename temp storage to target failed: {} -> {}: {e}",
                tmp_path.display(),
                self.path.display()
            ))
        })
    }
}

#[async_trait]
impl KeyValueStoragePort for FileKeyValueStorage {
    async fn get(&self, keys: &[&str]) -> Result<StorageItems, StorageError> {
        let all = self.read_all().await?;
        Ok(select_keys(&all, keys))
    }

    async fn set(&self, items: StorageItems) -> Result<(), StorageError> {
        let mut all = self.read_all().await?;
        all.extend(items);

        let content = serde_json::to_string_pretty(&all)
            .map_err(|e| StorageError::Serialization(format!("serialize storage failed: {e}")))?;
        ensure_within_quota(content.len(), self.quota_bytes)?;

        self.atomic_write(&content).await?;
        tracing::debug!(
            path = %self.path.display(),
            bytes = content.len(),
            "storage area written"
        );
        Ok(())
    }
}
