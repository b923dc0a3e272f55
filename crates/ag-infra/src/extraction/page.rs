use std::path::PathBuf;

use ag_core::ports::{ContentExtractorPort, ExtractionError};
use async_trait::async_trait;

use super::document::HtmlDocument;
use super::lookup::LookupChain;

/// Extracts content from a saved HTML page on disk.
pub struct HtmlFileExtractor {
    path: PathBuf,
    chain: LookupChain,
}

impl HtmlFileExtractor {
    pub fn new(path: impl Into<PathBuf>, chain: LookupChain) -> Self {
        Self {
            path: path.into(),
            chain,
        }
    }
}

#[async_trait]
impl ContentExtractorPort for HtmlFileExtractor {
    #[tracing::instrument(name = "infra.html_file_extractor.extract", skip(self), fields(path = %self.path.display()))]
    async fn extract(&self) -> Result<Option<String>, ExtractionError> {
        let html = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            ExtractionError::PageUnavailable(format!("{}: {e}", self.path.display()))
        })?;

        let document = HtmlDocument::new(html);
        Ok(self.chain.find(&document))
    }
}
