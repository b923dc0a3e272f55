use std::sync::Arc;

use ag_core::commit::{Commit, CommitError};
use ag_core::ids::CommitId;

use crate::commit_store::CommitStore;

/// Use case for opening one commit in full.
pub struct GetCommit {
    store: Arc<CommitStore>,
}

impl GetCommit {
    pub fn new(store: Arc<CommitStore>) -> Self {
        Self { store }
    }

    /// `Ok(None)` is the normal outcome for an id that is not stored.
    #[tracing::instrument(
        name = "usecase.get_commit.execute",
        skip(self),
        fields(commit_id = %id)
    )]
    pub async fn execute(&self, id: &CommitId) -> Result<Option<Commit>, CommitError> {
        self.store.get(id).await
    }
}
