//! Where AgentGit keeps its files on this machine.

use std::path::PathBuf;

/// Resolved application data root; concrete file locations are derived
/// from it by `ag_app::AppPaths`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
}
