//! Commit domain: a labeled snapshot of captured page content and the
//! bounded, newest-first collection that holds them.

mod collection;
mod error;
mod label;
mod preview;
mod record;

pub use collection::{CommitCollection, MAX_COMMITS};
pub use error::CommitError;
pub use label::CommitLabel;
pub use preview::{derive_preview, PREVIEW_CHARS, TRUNCATION_MARKER};
pub use record::Commit;
