//! # Application Dependencies / 应用依赖
//!
//! Dependency grouping for [`App`] construction. Plain parameter packing:
//! no defaults, no hidden logic. Filling in defaults is the bootstrap's job.
//!
//! 仅用于参数打包，默认值由 bootstrap 负责。

use std::sync::Arc;

use ag_core::ports::{ClockPort, ContentExtractorPort, ExportPort, KeyValueStoragePort};

use crate::commit_store::CommitStore;
use crate::usecases::{
    ConfirmCommit, DeleteCommit, ExportCommit, GetCommit, ListCommitProjections, StageCommit,
};

/// All ports the application needs. Every field is required.
/// 应用所需的全部端口，均为必填。
pub struct AppDeps {
    // Storage / 存储
    pub storage: Arc<dyn KeyValueStoragePort>,

    // Page content / 页面内容
    pub extractor: Arc<dyn ContentExtractorPort>,
    pub exporter: Arc<dyn ExportPort>,

    // System / 系统
    pub clock: Arc<dyn ClockPort>,
}

/// The application runtime: one commit store plus use case accessors.
pub struct App {
    store: Arc<CommitStore>,
    extractor: Arc<dyn ContentExtractorPort>,
    exporter: Arc<dyn ExportPort>,
}

impl App {
    /// This constructor signature is the dependency manifest.
    /// 构造函数签名就是依赖清单。
    pub fn new(deps: AppDeps) -> Self {
        Self {
            store: Arc::new(CommitStore::new(deps.storage, deps.clock)),
            extractor: deps.extractor,
            exporter: deps.exporter,
        }
    }

    pub fn store(&self) -> &Arc<CommitStore> {
        &self.store
    }

    pub fn stage_commit(&self) -> StageCommit {
        StageCommit::from_port(self.extractor.clone())
    }

    pub fn confirm_commit(&self) -> ConfirmCommit {
        ConfirmCommit::new(self.store.clone())
    }

    pub fn list_commit_projections(&self) -> ListCommitProjections {
        ListCommitProjections::new(self.store.clone())
    }

    pub fn get_commit(&self) -> GetCommit {
        GetCommit::new(self.store.clone())
    }

    pub fn delete_commit(&self) -> DeleteCommit {
        DeleteCommit::new(self.store.clone())
    }

    pub fn export_commit(&self) -> ExportCommit {
        ExportCommit::new(self.store.clone(), self.exporter.clone())
    }
}
