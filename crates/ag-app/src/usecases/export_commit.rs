use std::path::{Path, PathBuf};
use std::sync::Arc;

use ag_core::commit::CommitError;
use ag_core::ids::CommitId;
use ag_core::ports::ExportPort;
use tracing::{debug, info};

use crate::commit_store::CommitStore;

/// File name used when the user does not pick one.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "markdown-content.txt";

/// Use case for saving a commit's content as a plain-text file.
/// 将提交内容导出为文本文件。
pub struct ExportCommit {
    store: Arc<CommitStore>,
    exporter: Arc<dyn ExportPort>,
}

impl ExportCommit {
    pub fn new(store: Arc<CommitStore>, exporter: Arc<dyn ExportPort>) -> Self {
        Self { store, exporter }
    }

    /// Writes the content of commit `id` to `out`.
    ///
    /// Returns the written path, or `None` when no commit has that id (in
    /// which case nothing is written).
    #[tracing::instrument(
        name = "usecase.export_commit.execute",
        skip(self, out),
        fields(commit_id = %id, out = %out.display())
    )]
    pub async fn execute(&self, id: &CommitId, out: &Path) -> Result<Option<PathBuf>, CommitError> {
        let Some(commit) = self.store.get(id).await? else {
            debug!("no commit with this id, nothing exported");
            return Ok(None);
        };

        self.exporter.write_text(out, &commit.content).await?;

        info!(bytes = commit.content.len(), "commit exported");
        Ok(Some(out.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ag_core::ports::{ClockPort, StorageError};
    use ag_infra::InMemoryKeyValueStorage;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FixedClock;

    impl ClockPort for FixedClock {
        fn now_ms(&self) -> i64 {
            1_700_000_000_000
        }
    }

    #[derive(Default)]
    struct RecordingExporter {
        written: Mutex<Vec<(PathBuf, String)>>,
    }

    #[async_trait]
    impl ExportPort for RecordingExporter {
        async fn write_text(&self, path: &Path, content: &str) -> Result<(), StorageError> {
            self.written
                .lock()
                .unwrap()
                .push((path.to_path_buf(), content.to_string()));
            Ok(())
        }
    }

    fn store() -> Arc<CommitStore> {
        Arc::new(CommitStore::new(
            Arc::new(InMemoryKeyValueStorage::new()),
            Arc::new(FixedClock),
        ))
    }

    #[tokio::test]
    async fn exports_full_content_to_the_requested_path() {
        let store = store();
        let exporter = Arc::new(RecordingExporter::default());
        let commit = store.create("doc", &"z".repeat(300)).await.unwrap();
        let out = PathBuf::from("/tmp").join(DEFAULT_EXPORT_FILE_NAME);

        let written = ExportCommit::new(store, exporter.clone())
            .execute(&commit.id, &out)
            .await
            .unwrap();

        assert_eq!(written, Some(out.clone()));
        let calls = exporter.written.lock().unwrap();
        assert_eq!(calls.as_slice(), &[(out, "z".repeat(300))]);
    }

    #[tokio::test]
    async fn unknown_id_writes_nothing() {
        let exporter = Arc::new(RecordingExporter::default());

        let written = ExportCommit::new(store(), exporter.clone())
            .execute(&CommitId::from_str("missing"), Path::new("/tmp/x.txt"))
            .await
            .unwrap();

        assert_eq!(written, None);
        assert!(exporter.written.lock().unwrap().is_empty());
    }
}
