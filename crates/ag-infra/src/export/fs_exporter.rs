use std::path::Path;

use ag_core::ports::{ExportPort, StorageError};
use async_trait::async_trait;
use tokio::fs;

/// Writes exported content as a plain-text file, creating parent directories.
pub struct FsExporter;

#[async_trait]
impl ExportPort for FsExporter {
    async fn write_text(&self, path: &Path, content: &str) -> Result<(), StorageError> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).await.map_err(|e| {
                StorageError::Io(format!("create export dir failed: {}: {e}", dir.display()))
            })?;
        }

        fs::write(path, content)
            .await
            .map_err(|e| StorageError::Io(format!("write export failed: {}: {e}", path.display())))?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "exported content");
        Ok(())
    }
}
