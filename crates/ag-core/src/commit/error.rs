use thiserror::Error;

use crate::ports::errors::{ExtractionError, StorageError};

/// Failures surfaced by the commit flow.
///
/// A lookup miss (`get`/`delete` of an unknown id) is not an error and has
/// no variant here.
#[derive(Debug, Error)]
pub enum CommitError {
    /// The page did not contain the expected element.
    #[error("content not found on page")]
    ExtractionNotFound,

    /// The page itself could not be read.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// Confirmation attempted with an empty label.
    #[error("a commit label is required")]
    MissingLabel,

    /// The value stored under the commits key is not a record list.
    #[error("stored commits are corrupt: {0}")]
    Corrupt(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
