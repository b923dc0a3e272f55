//! # Pure Data Module / 纯数据模块
//!
//! Configuration data structures and the TOML → DTO mapping.
//!
//! > **This module contains data only, no policy, no validation.**
//!
//! Defaults for missing values are decided by the wiring layer, not here.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Commit storage file (may be empty - the wiring layer picks a default)
    pub storage_path: PathBuf,

    /// Storage quota in bytes; `None` when not configured, `Some(0)` for unlimited
    pub storage_quota_bytes: Option<u64>,

    /// Primary class selector for content extraction (may be empty)
    pub primary_selector: String,

    /// Fallback class selector, tried when the primary finds nothing (may be empty)
    pub fallback_selector: String,

    /// Also write logs to a file in the app data directory
    pub log_to_file: bool,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Empty strings and missing sections are valid "facts"; nothing is
    /// validated here.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            storage_path: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("path"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            storage_quota_bytes: toml_value
                .get("storage")
                .and_then(|s| s.get("quota_bytes"))
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64),
            primary_selector: toml_value
                .get("extraction")
                .and_then(|e| e.get("primary_selector"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            fallback_selector: toml_value
                .get("extraction")
                .and_then(|e| e.get("fallback_selector"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            log_to_file: toml_value
                .get("logging")
                .and_then(|l| l.get("file"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            storage_path: PathBuf::new(),
            storage_quota_bytes: None,
            primary_selector: String::new(),
            fallback_selector: String::new(),
            log_to_file: false,
        }
    }
}
