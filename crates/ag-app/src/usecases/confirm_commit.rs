use std::sync::Arc;

use ag_core::commit::{Commit, CommitError, CommitLabel};

use crate::commit_store::CommitStore;
use crate::pending_commit::PendingCommit;

/// Use case for persisting staged content under a user label.
/// 为暂存内容加上标签并保存。
pub struct ConfirmCommit {
    store: Arc<CommitStore>,
}

impl ConfirmCommit {
    pub fn new(store: Arc<CommitStore>) -> Self {
        Self { store }
    }

    /// Consumes `pending` and stores it as a new commit.
    ///
    /// The label has already passed [`CommitLabel::parse`], so a blank label
    /// never reaches this point and the caller can keep the pending content
    /// while asking again.
    #[tracing::instrument(
        name = "usecase.confirm_commit.execute",
        skip(self, pending),
        fields(label = %label)
    )]
    pub async fn execute(
        &self,
        pending: PendingCommit,
        label: CommitLabel,
    ) -> Result<Commit, CommitError> {
        self.store
            .create(label.as_str(), &pending.into_content())
            .await
    }
}
