//! Content extraction from HTML pages.
//!
//! A page is searched with an ordered chain of lookup strategies; the first
//! strategy that yields non-empty text wins. The default chain is the
//! primary class selector followed by a looser fallback selector.

mod document;
mod lookup;
mod page;
mod selector;

pub use document::HtmlDocument;
pub use lookup::{LookupChain, LookupStrategy, SelectorLookup};
pub use page::HtmlFileExtractor;
pub use selector::{ClassSelector, SelectorError};

/// Selector of the rendered markdown container.
pub const DEFAULT_PRIMARY_SELECTOR: &str =
    r".prose.prose-slate.dark\:prose-invert.max-w-none.prose-sm";

/// Looser selector tried when the primary one finds nothing.
pub const DEFAULT_FALLBACK_SELECTOR: &str = "div.prose.prose-slate";
