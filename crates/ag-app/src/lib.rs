//! AgentGit application layer
//!
//! The commit store plus the use cases the front end drives:
//! stage (extract) → confirm (label + persist), list, delete, export.

pub mod app_paths;
pub mod commit_store;
pub mod deps;
pub mod pending_commit;
pub mod usecases;

pub use app_paths::AppPaths;
pub use commit_store::{CommitStore, COMMITS_KEY};
pub use deps::{App, AppDeps};
pub use pending_commit::PendingCommit;
