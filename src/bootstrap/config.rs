//! # Configuration Loader / 配置加载器
//!
//! Reads the TOML file into the [`AppConfig`] DTO. Pure data loading:
//! no validation, no defaults. Empty values are facts; the wiring layer
//! decides what they mean.
//!
//! 仅纯数据加载，接受文件中的任何内容。

use std::path::PathBuf;

use ag_app::AppPaths;
use ag_core::config::AppConfig;
use anyhow::Context;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// The file cannot be read, or its content is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Picks the configuration source.
///
/// An explicit path must load. Without one, `<app data>/config.toml` is used
/// when present; otherwise every value is left empty.
pub fn resolve_config(explicit: Option<PathBuf>, paths: &AppPaths) -> anyhow::Result<AppConfig> {
    match explicit {
        Some(path) => load_config(path),
        None if paths.config_path.is_file() => load_config(paths.config_path.clone()),
        None => Ok(AppConfig::empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ag_core::app_dirs::AppDirs;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn paths_in(dir: &TempDir) -> AppPaths {
        AppPaths::from_app_dirs(&AppDirs {
            app_data_root: dir.path().to_path_buf(),
        })
    }

    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [storage]
            path = "/data/commits.json"
            quota_bytes = 2048

            [extraction]
            primary_selector = "article.note"
            fallback_selector = "div.prose"

            [logging]
            file = true
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.storage_path, PathBuf::from("/data/commits.json"));
        assert_eq!(config.storage_quota_bytes, Some(2048));
        assert_eq!(config.primary_selector, "article.note");
        assert_eq!(config.fallback_selector, "div.prose");
        assert!(config.log_to_file);
    }

    #[test]
    fn test_load_config_returns_error_for_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[storage\npath = ").unwrap();

        let err = load_config(temp_file.path().to_path_buf()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_load_config_returns_error_for_missing_file() {
        let err = load_config(PathBuf::from("/nonexistent/agentgit/config.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn resolve_without_flag_or_file_yields_empty_config() {
        let dir = TempDir::new().unwrap();

        let config = resolve_config(None, &paths_in(&dir)).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn resolve_without_flag_reads_config_from_app_data() {
        let dir = TempDir::new().unwrap();
        let paths = paths_in(&dir);
        std::fs::write(&paths.config_path, "[logging]\nfile = true\n").unwrap();

        let config = resolve_config(None, &paths).unwrap();

        assert!(config.log_to_file);
    }

    #[test]
    fn resolve_with_flag_requires_the_file() {
        let dir = TempDir::new().unwrap();

        let result = resolve_config(Some(dir.path().join("missing.toml")), &paths_in(&dir));

        assert!(result.is_err());
    }
}
