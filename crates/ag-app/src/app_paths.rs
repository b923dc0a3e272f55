use std::path::PathBuf;

use ag_core::app_dirs::AppDirs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config_path: PathBuf,
    pub storage_path: PathBuf,
    pub exports_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            config_path: dirs.app_data_root.join("config.toml"),
            storage_path: dirs.app_data_root.join("commits.json"),
            exports_dir: dirs.app_data_root.join("exports"),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }
}
