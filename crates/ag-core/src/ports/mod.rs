//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The commit store and the use cases
//! only ever see these traits; storage files, HTML parsing and the system
//! clock live behind them in `ag-infra`.

pub mod app_dirs;
mod clock;
pub mod errors;
mod export;
mod extraction;
mod storage;

pub use app_dirs::AppDirsPort;
pub use clock::ClockPort;
pub use errors::{AppDirsError, ExtractionError, StorageError};
pub use export::ExportPort;
pub use extraction::ContentExtractorPort;
pub use storage::{KeyValueStoragePort, StorageItems};
