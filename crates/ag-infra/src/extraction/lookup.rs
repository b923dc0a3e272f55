use super::document::HtmlDocument;
use super::selector::{ClassSelector, SelectorError};

/// One way of finding the labeled content in a document.
pub trait LookupStrategy: Send + Sync {
    /// Short human-readable description, used in logs.
    fn describe(&self) -> String;

    /// Non-empty content, or `None` when this strategy finds nothing.
    fn find(&self, document: &HtmlDocument) -> Option<String>;
}

/// Looks up the first element matching a [`ClassSelector`].
#[derive(Debug, Clone)]
pub struct SelectorLookup {
    selector: ClassSelector,
}

impl SelectorLookup {
    pub fn new(selector: ClassSelector) -> Self {
        Self { selector }
    }

    pub fn parse(selector: &str) -> Result<Self, SelectorError> {
        Ok(Self::new(selector.parse()?))
    }
}

impl LookupStrategy for SelectorLookup {
    fn describe(&self) -> String {
        format!("selector `{}`", self.selector)
    }

    fn find(&self, document: &HtmlDocument) -> Option<String> {
        document.select_text(&self.selector)
    }
}

/// Strategies tried in order; the first hit wins.
#[derive(Default)]
pub struct LookupChain {
    strategies: Vec<Box<dyn LookupStrategy>>,
}

impl LookupChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, strategy: impl LookupStrategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// The usual two-step chain: a precise primary selector, then a looser fallback.
    pub fn primary_then_fallback(primary: &str, fallback: &str) -> Result<Self, SelectorError> {
        Ok(Self::new()
            .with(SelectorLookup::parse(primary)?)
            .with(SelectorLookup::parse(fallback)?))
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub fn find(&self, document: &HtmlDocument) -> Option<String> {
        for strategy in &self.strategies {
            if let Some(content) = strategy.find(document) {
                tracing::debug!(strategy = %strategy.describe(), "content found");
                return Some(content);
            }
            tracing::debug!(strategy = %strategy.describe(), "no match, trying next strategy");
        }
        None
    }
}
