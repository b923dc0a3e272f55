//! # Dependency Wiring / 依赖注入
//!
//! Turns the raw [`AppConfig`] into concrete settings (this is where
//! defaults live) and assembles the adapters into an [`App`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ag_app::{App, AppDeps, AppPaths};
use ag_core::config::AppConfig;
use ag_core::ports::{ContentExtractorPort, ExtractionError};
use ag_infra::extraction::{DEFAULT_FALLBACK_SELECTOR, DEFAULT_PRIMARY_SELECTOR};
use ag_infra::storage::DEFAULT_QUOTA_BYTES;
use ag_infra::{FileKeyValueStorage, FsExporter, HtmlFileExtractor, LookupChain, SystemClock};
use anyhow::Context;
use async_trait::async_trait;
use tracing::debug;

/// Configuration with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub storage_path: PathBuf,
    /// `0` means unlimited
    pub quota_bytes: u64,
    pub primary_selector: String,
    pub fallback_selector: String,
    pub log_dir: Option<PathBuf>,
}

impl ResolvedSettings {
    pub fn resolve(config: &AppConfig, paths: &AppPaths) -> Self {
        fn or_default(value: &str, default: &str) -> String {
            if value.trim().is_empty() {
                default.to_string()
            } else {
                value.to_string()
            }
        }

        let storage_path = if config.storage_path.as_os_str().is_empty() {
            paths.storage_path.clone()
        } else {
            config.storage_path.clone()
        };

        Self {
            storage_path,
            quota_bytes: config.storage_quota_bytes.unwrap_or(DEFAULT_QUOTA_BYTES),
            primary_selector: or_default(&config.primary_selector, DEFAULT_PRIMARY_SELECTOR),
            fallback_selector: or_default(&config.fallback_selector, DEFAULT_FALLBACK_SELECTOR),
            log_dir: config.log_to_file.then(|| paths.logs_dir.clone()),
        }
    }
}

/// Stand-in extractor for commands that were given no page.
struct NoPage;

#[async_trait]
impl ContentExtractorPort for NoPage {
    async fn extract(&self) -> Result<Option<String>, ExtractionError> {
        Err(ExtractionError::PageUnavailable(
            "no page was given".to_string(),
        ))
    }
}

/// Builds the application. `page` is the HTML file standing in for the
/// active tab; commands that never extract pass `None`.
///
/// # Errors
///
/// A configured selector cannot be parsed.
pub fn wire_app(settings: &ResolvedSettings, page: Option<&Path>) -> anyhow::Result<App> {
    let extractor: Arc<dyn ContentExtractorPort> = match page {
        Some(page) => {
            let chain = LookupChain::primary_then_fallback(
                &settings.primary_selector,
                &settings.fallback_selector,
            )
            .context("Invalid extraction selector in config")?;
            Arc::new(HtmlFileExtractor::new(page, chain))
        }
        None => Arc::new(NoPage),
    };

    debug!(
        storage = %settings.storage_path.display(),
        quota_bytes = settings.quota_bytes,
        "wiring application"
    );

    let storage =
        FileKeyValueStorage::new(settings.storage_path.clone()).with_quota(settings.quota_bytes);

    Ok(App::new(AppDeps {
        storage: Arc::new(storage),
        extractor,
        exporter: Arc::new(FsExporter),
        clock: Arc::new(SystemClock),
    }))
}
