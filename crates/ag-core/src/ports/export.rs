use std::path::Path;

use async_trait::async_trait;

use crate::ports::errors::StorageError;

/// Writes exported commit content somewhere the user can pick it up.
#[async_trait]
pub trait ExportPort: Send + Sync {
    async fn write_text(&self, path: &Path, content: &str) -> Result<(), StorageError>;
}
