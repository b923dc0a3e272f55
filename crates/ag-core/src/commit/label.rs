use std::fmt;

use super::error::CommitError;

/// User-entered commit label, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitLabel(String);

impl CommitLabel {
    /// Trims surrounding whitespace; a blank label is [`CommitError::MissingLabel`].
    pub fn parse(raw: &str) -> Result<Self, CommitError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CommitError::MissingLabel);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let label = CommitLabel::parse("  fix bug \n").unwrap();
        assert_eq!(label.as_str(), "fix bug");
    }

    #[test]
    fn blank_labels_are_rejected() {
        for raw in ["", "   ", "\t\n"] {
            assert!(matches!(
                CommitLabel::parse(raw),
                Err(CommitError::MissingLabel)
            ));
        }
    }
}
