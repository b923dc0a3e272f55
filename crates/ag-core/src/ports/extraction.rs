use async_trait::async_trait;

use crate::ports::errors::ExtractionError;

/// Finds the labeled content of the current page.
///
/// Returns `Ok(Some(text))` with non-empty text, `Ok(None)` when the page
/// has no matching element, and `Err` only when the page itself cannot be
/// reached.
#[async_trait]
pub trait ContentExtractorPort: Send + Sync {
    async fn extract(&self) -> Result<Option<String>, ExtractionError>;
}

#[cfg(test)]
mockall::mock! {
    pub Extractor {}

    #[async_trait]
    impl ContentExtractorPort for Extractor {
        async fn extract(&self) -> Result<Option<String>, ExtractionError>;
    }
}
