use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("platform data directory is unavailable")]
    DataDirUnavailable,
}

/// Failures of the key-value storage substrate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage quota exceeded: {needed} bytes needed, quota is {quota} bytes")]
    QuotaExceeded { needed: u64, quota: u64 },

    #[error("storage io error: {0}")]
    Io(String),

    #[error("storage serialization error: {0}")]
    Serialization(String),
}

/// Failures reaching the page content is extracted from.
///
/// "Element not found" is not an error of the extractor; it is reported as
/// an absent value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("page unavailable: {0}")]
    PageUnavailable(String),
}
