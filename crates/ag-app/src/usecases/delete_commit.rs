use std::sync::Arc;

use ag_core::commit::CommitError;
use ag_core::ids::CommitId;

use crate::commit_store::CommitStore;

/// Use case for deleting a commit.
/// 删除提交的用例。
pub struct DeleteCommit {
    store: Arc<CommitStore>,
}

impl DeleteCommit {
    pub fn new(store: Arc<CommitStore>) -> Self {
        Self { store }
    }

    /// Deletes the commit with `id`. Unknown ids are silently ignored.
    #[tracing::instrument(
        name = "usecase.delete_commit.execute",
        skip(self),
        fields(commit_id = %id)
    )]
    pub async fn execute(&self, id: &CommitId) -> Result<(), CommitError> {
        self.store.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::GetCommit;
    use ag_core::ports::ClockPort;
    use ag_infra::InMemoryKeyValueStorage;

    struct FixedClock;

    impl ClockPort for FixedClock {
        fn now_ms(&self) -> i64 {
            0
        }
    }

    #[tokio::test]
    async fn deleted_commit_can_no_longer_be_opened() {
        let store = Arc::new(CommitStore::new(
            Arc::new(InMemoryKeyValueStorage::new()),
            Arc::new(FixedClock),
        ));
        let created = store.create("label", "content").await.unwrap();

        DeleteCommit::new(store.clone())
            .execute(&created.id)
            .await
            .unwrap();

        let found = GetCommit::new(store.clone())
            .execute(&created.id)
            .await
            .unwrap();
        assert_eq!(found, None);
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleting_unknown_id_is_not_an_error() {
        let store = Arc::new(CommitStore::new(
            Arc::new(InMemoryKeyValueStorage::new()),
            Arc::new(FixedClock),
        ));
        store.create("kept", "content").await.unwrap();

        DeleteCommit::new(store.clone())
            .execute(&CommitId::from_str("nope"))
            .await
            .unwrap();

        assert_eq!(store.list().await.unwrap().len(), 1);
    }
}
