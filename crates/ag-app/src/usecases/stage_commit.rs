use std::sync::Arc;

use ag_core::commit::CommitError;
use ag_core::ports::ContentExtractorPort;
use tracing::{debug, info};

use crate::pending_commit::PendingCommit;

/// Use case for capturing page content ahead of labeling.
/// 提取页面内容，等待用户输入标签。
pub struct StageCommit {
    extractor: Arc<dyn ContentExtractorPort>,
}

impl StageCommit {
    pub fn from_port(extractor: Arc<dyn ContentExtractorPort>) -> Self {
        Self { extractor }
    }

    /// Runs extraction and wraps the result for confirmation.
    ///
    /// # Errors
    ///
    /// [`CommitError::ExtractionNotFound`] when the page has no matching
    /// element (or only whitespace in it), [`CommitError::Extraction`] when the
    /// page cannot be read. The store is never touched.
    #[tracing::instrument(name = "usecase.stage_commit.execute", skip(self))]
    pub async fn execute(&self) -> Result<PendingCommit, CommitError> {
        let extracted = self.extractor.extract().await?;

        let Some(pending) = extracted.and_then(PendingCommit::new) else {
            debug!("no content found on page");
            return Err(CommitError::ExtractionNotFound);
        };

        info!(content_len = pending.content().len(), "content staged");
        Ok(pending)
    }
}
