//! Commit list as the front end shows it: label, preview and a short
//! local timestamp per row, newest first.
//! 前端列表展示用的提交投影。

use std::sync::Arc;

use ag_core::commit::{Commit, CommitError};
use ag_core::ids::CommitId;
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::Serialize;

use crate::commit_store::CommitStore;

/// `strftime` pattern for [`CommitProjection::created_at_display`].
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitProjection {
    pub id: CommitId,
    pub label: String,
    pub preview: String,
    pub created_at: DateTime<Utc>,
    pub created_at_display: String,
}

impl CommitProjection {
    pub fn from_commit_in<Tz>(commit: Commit, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let created_at_display = commit
            .created_at
            .with_timezone(tz)
            .format(DISPLAY_TIME_FORMAT)
            .to_string();

        Self {
            id: commit.id,
            label: commit.label,
            preview: commit.preview,
            created_at: commit.created_at,
            created_at_display,
        }
    }
}

pub struct ListCommitProjections {
    store: Arc<CommitStore>,
}

impl ListCommitProjections {
    pub fn new(store: Arc<CommitStore>) -> Self {
        Self { store }
    }

    /// Projections in stored order, timestamps rendered in local time.
    #[tracing::instrument(name = "usecase.list_commit_projections.execute", skip(self))]
    pub async fn execute(&self) -> Result<Vec<CommitProjection>, CommitError> {
        self.execute_in(&Local).await
    }

    pub async fn execute_in<Tz>(&self, tz: &Tz) -> Result<Vec<CommitProjection>, CommitError>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let commits = self.store.list().await?;
        Ok(commits
            .into_iter()
            .map(|commit| CommitProjection::from_commit_in(commit, tz))
            .collect())
    }
}
