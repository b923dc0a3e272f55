//! # ag-core
//!
//! Core domain models and ports for AgentGit.
//!
//! This crate contains pure domain logic without any infrastructure dependencies.

pub mod app_dirs;
pub mod commit;
pub mod config;
pub mod ids;
pub mod ports;

// Re-export commonly used types at the crate root
pub use commit::{Commit, CommitCollection, CommitError, CommitLabel, MAX_COMMITS};
pub use config::AppConfig;
pub use ids::CommitId;
