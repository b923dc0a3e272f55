use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::preview::derive_preview;
use crate::ids::CommitId;

/// One saved content capture.
///
/// Records are created once and never mutated; the preview is derived at
/// construction time.
///
/// 一次保存的内容快照，创建后不可变。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredCommit")]
pub struct Commit {
    pub id: CommitId,
    #[serde(rename = "message")]
    pub label: String,
    pub content: String,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
    pub preview: String,
}

impl Commit {
    pub fn new(
        id: CommitId,
        label: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let content = content.into();
        Self {
            id,
            label: label.into(),
            preview: derive_preview(&content),
            content,
            created_at,
        }
    }
}

/// Persisted shape of a [`Commit`].
///
/// Accepts both the `message`/`date` and `label`/`createdAt` spellings, and
/// records written without a preview get it recomputed.
#[derive(Deserialize)]
struct StoredCommit {
    id: CommitId,
    #[serde(rename = "message", alias = "label")]
    label: String,
    content: String,
    #[serde(rename = "date", alias = "createdAt")]
    created_at: DateTime<Utc>,
    #[serde(default)]
    preview: Option<String>,
}

impl From<StoredCommit> for Commit {
    fn from(stored: StoredCommit) -> Self {
        let preview = stored
            .preview
            .unwrap_or_else(|| derive_preview(&stored.content));
        Self {
            id: stored.id,
            label: stored.label,
            content: stored.content,
            created_at: stored.created_at,
            preview,
        }
    }
}
