//! Business logic use cases
//!
//! A capture is two steps because the user decides in between:
//!
//! ```text
//! StageCommit   (extract page content)  → PendingCommit
//!       ↓  user types a label
//! ConfirmCommit (label + persist)       → Commit
//! ```
//!
//! Everything else reads or edits the stored collection.

pub mod confirm_commit;
pub mod delete_commit;
pub mod export_commit;
pub mod get_commit;
pub mod list_commit_projections;
pub mod stage_commit;

pub use confirm_commit::ConfirmCommit;
pub use delete_commit::DeleteCommit;
pub use export_commit::{ExportCommit, DEFAULT_EXPORT_FILE_NAME};
pub use get_commit::GetCommit;
pub use list_commit_projections::{CommitProjection, ListCommitProjections, DISPLAY_TIME_FORMAT};
pub use stage_commit::StageCommit;
