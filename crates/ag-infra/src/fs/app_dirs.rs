use std::path::PathBuf;

use ag_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "agentgit";

/// `AGENTGIT_PROFILE=work` resolves to `agentgit-work`, keeping profiles apart.
fn resolved_app_dir_name() -> String {
    match std::env::var("AGENTGIT_PROFILE") {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

pub struct DirsAppDirsAdapter {
    base_data_local_dir_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self {
            base_data_local_dir_override: None,
        }
    }

    /// Uses `base` instead of the platform data directory.
    pub fn with_base_data_local_dir(base: PathBuf) -> Self {
        Self {
            base_data_local_dir_override: Some(base),
        }
    }

    pub fn base_data_local_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_data_local_dir_override {
            return Some(base.clone());
        }
        dirs::data_local_dir()
    }
}

impl Default for DirsAppDirsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base_data = self
            .base_data_local_dir()
            .ok_or(AppDirsError::DataDirUnavailable)?;

        Ok(AppDirs {
            app_data_root: base_data.join(resolved_app_dir_name()),
        })
    }
}
