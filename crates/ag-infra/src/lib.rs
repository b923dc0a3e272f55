pub mod export;
pub mod extraction;
pub mod fs;
pub mod storage;
pub mod time;

pub use export::FsExporter;
pub use extraction::{HtmlFileExtractor, LookupChain, SelectorLookup};
pub use fs::DirsAppDirsAdapter;
pub use storage::{FileKeyValueStorage, InMemoryKeyValueStorage};
pub use time::SystemClock;
