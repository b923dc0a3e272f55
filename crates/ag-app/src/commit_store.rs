//! Commit store: the bounded, newest-first commit collection kept under a
//! single key of the storage area.
//!
//! Every operation is one read-modify-write round trip. There is no locking
//! across sessions; two front ends writing at the same moment can lose an
//! update, which is accepted for a single-user tool.

use std::sync::Arc;

use ag_core::commit::{Commit, CommitCollection, CommitError};
use ag_core::ids::CommitId;
use ag_core::ports::{ClockPort, KeyValueStoragePort, StorageError, StorageItems};
use chrono::{TimeZone, Utc};
use serde_json::Value;
use tracing::{debug, info};

/// Storage key holding the whole commit collection.
pub const COMMITS_KEY: &str = "commits";

pub struct CommitStore {
    storage: Arc<dyn KeyValueStoragePort>,
    clock: Arc<dyn ClockPort>,
}

impl CommitStore {
    pub fn new(storage: Arc<dyn KeyValueStoragePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { storage, clock }
    }

    /// Creates a commit and stores it at the front of the collection.
    ///
    /// The label is stored as given; callers reject blank labels beforehand
    /// (see [`CommitLabel`](ag_core::CommitLabel)). When the collection is
    /// full the oldest commits are evicted.
    ///
    /// # Errors
    ///
    /// Storage failures, and [`CommitError::Corrupt`] when the stored value
    /// cannot be read back as commits. Nothing is written in either case.
    #[tracing::instrument(
        name = "commit_store.create",
        skip(self, content),
        fields(content_len = content.len())
    )]
    pub async fn create(&self, label: &str, content: &str) -> Result<Commit, CommitError> {
        let now_ms = self.clock.now_ms();
        let created_at = Utc
            .timestamp_millis_opt(now_ms)
            .single()
            .unwrap_or_else(Utc::now);
        let commit = Commit::new(CommitId::new(), label, content, created_at);

        let mut commits = self.load().await?;
        let evicted = commits.push_front(commit.clone());
        if !evicted.is_empty() {
            debug!(evicted = evicted.len(), "collection full, evicted oldest commits");
        }
        self.save(&commits).await?;

        info!(commit_id = %commit.id, total = commits.len(), "commit created");
        Ok(commit)
    }

    /// All commits, newest first; empty when nothing was ever stored.
    pub async fn list(&self) -> Result<Vec<Commit>, CommitError> {
        Ok(self.load().await?.into_vec())
    }

    /// The commit with `id`, or `None` when there is none.
    pub async fn get(&self, id: &CommitId) -> Result<Option<Commit>, CommitError> {
        Ok(self.load().await?.find(id).cloned())
    }

    /// Removes the commit with `id`.
    ///
    /// An unknown id is not an error: the collection is written back unchanged.
    #[tracing::instrument(name = "commit_store.delete", skip(self), fields(commit_id = %id))]
    pub async fn delete(&self, id: &CommitId) -> Result<(), CommitError> {
        let mut commits = self.load().await?;
        let removed = commits.remove(id);
        self.save(&commits).await?;

        if removed == 0 {
            debug!("no commit with this id, collection unchanged");
        } else {
            info!(remaining = commits.len(), "commit deleted");
        }
        Ok(())
    }

    async fn load(&self) -> Result<CommitCollection, CommitError> {
        let mut items = self.storage.get(&[COMMITS_KEY]).await?;
        match items.remove(COMMITS_KEY) {
            None | Some(Value::Null) => Ok(CommitCollection::new()),
            Some(value) => serde_json::from_value::<Vec<Commit>>(value)
                .map(CommitCollection::from_vec)
                .map_err(|e| CommitError::Corrupt(e.to_string())),
        }
    }

    async fn save(&self, commits: &CommitCollection) -> Result<(), CommitError> {
        let value = serde_json::to_value(commits.as_slice())
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        let mut items = StorageItems::new();
        items.insert(COMMITS_KEY.to_string(), value);
        self.storage.set(items).await?;
        Ok(())
    }
}
