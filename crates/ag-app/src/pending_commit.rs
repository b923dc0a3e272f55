use ag_core::commit::derive_preview;

/// Content captured from a page and waiting for its label.
///
/// Produced by [`StageCommit`](crate::usecases::StageCommit) and consumed by
/// [`ConfirmCommit`](crate::usecases::ConfirmCommit); it lives only as long
/// as one capture-and-confirm flow, so nothing staged can leak into an
/// unrelated action.
///
/// 一次“提取 → 确认”流程中暂存的内容。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCommit {
    content: String,
}

impl PendingCommit {
    /// `None` for blank content: there is nothing worth committing.
    pub fn new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            return None;
        }
        Some(Self { content })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Preview the confirmed commit will carry.
    pub fn preview(&self) -> String {
        derive_preview(&self.content)
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_content_cannot_be_staged() {
        assert!(PendingCommit::new("").is_none());
        assert!(PendingCommit::new(" \n\t").is_none());
    }

    #[test]
    fn preview_matches_what_the_commit_will_store() {
        let pending = PendingCommit::new("x".repeat(120)).unwrap();
        assert_eq!(pending.preview(), format!("{}...", "x".repeat(100)));
        assert_eq!(pending.into_content().len(), 120);
    }
}
