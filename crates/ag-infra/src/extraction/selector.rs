use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("selector is empty")]
    Empty,

    #[error("unsupported selector syntax: {0}")]
    Unsupported(String),

    #[error("empty class name in selector: {0}")]
    EmptyClass(String),
}

/// Compound selector of an optional tag name and class names, e.g.
/// `div.prose.prose-slate` or `.prose.dark\:prose-invert`.
///
/// A backslash escapes the next character, so class names may contain `:`
/// or `.`. Combinators, ids and attribute selectors are not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSelector {
    tag: Option<String>,
    classes: Vec<String>,
}

impl ClassSelector {
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Whether an element with `tag` and the given `class` attribute matches.
    pub fn matches(&self, tag: &str, class_attr: Option<&str>) -> bool {
        if let Some(expected) = &self.tag {
            if !expected.eq_ignore_ascii_case(tag) {
                return false;
            }
        }

        let present: Vec<&str> = class_attr
            .map(|attr| attr.split_ascii_whitespace().collect())
            .unwrap_or_default();
        self.classes
            .iter()
            .all(|class| present.contains(&class.as_str()))
    }
}

impl FromStr for ClassSelector {
    type Err = SelectorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut segments: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut chars = input.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some(escaped) => current.push(escaped),
                    None => return Err(SelectorError::Unsupported(input.to_string())),
                },
                '.' => segments.push(std::mem::take(&mut current)),
                c if c.is_whitespace() || "#[]>+~,*".contains(c) => {
                    return Err(SelectorError::Unsupported(input.to_string()));
                }
                c => current.push(c),
            }
        }
        segments.push(current);

        let mut segments = segments.into_iter();
        let tag = segments.next().filter(|tag| !tag.is_empty());
        let classes: Vec<String> = segments.collect();

        if classes.iter().any(|class| class.is_empty()) {
            return Err(SelectorError::EmptyClass(input.to_string()));
        }

        Ok(Self { tag, classes })
    }
}

impl fmt::Display for ClassSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = &self.tag {
            write!(f, "{tag}")?;
        }
        for class in &self.classes {
            write!(f, ".")?;
            for c in class.chars() {
                if matches!(c, ':' | '.' | '\\') {
                    write!(f, "\\")?;
                }
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_escaped_class_names() {
        let selector: ClassSelector = r".prose.prose-slate.dark\:prose-invert.max-w-none.prose-sm"
            .parse()
            .unwrap();

        assert_eq!(selector.tag(), None);
        assert_eq!(
            selector.classes(),
            ["prose", "prose-slate", "dark:prose-invert", "max-w-none", "prose-sm"]
        );
    }

    #[test]
    fn parses_tag_with_classes() {
        let selector: ClassSelector = "div.prose.prose-slate".parse().unwrap();

        assert_eq!(selector.tag(), Some("div"));
        assert_eq!(selector.classes(), ["prose", "prose-slate"]);
    }

    #[test]
    fn rejects_combinators_and_empty_classes() {
        assert_eq!("".parse::<ClassSelector>(), Err(SelectorError::Empty));
        assert!(matches!(
            "div .prose".parse::<ClassSelector>(),
            Err(SelectorError::Unsupported(_))
        ));
        assert!(matches!(
            "div..prose".parse::<ClassSelector>(),
            Err(SelectorError::EmptyClass(_))
        ));
    }

    #[test]
    fn matches_requires_every_class_and_the_tag() {
        let selector: ClassSelector = "div.prose.prose-slate".parse().unwrap();

        assert!(selector.matches("div", Some("prose prose-slate max-w-none")));
        assert!(selector.matches("DIV", Some("  prose-slate\tprose ")));
        assert!(!selector.matches("div", Some("prose")));
        assert!(!selector.matches("section", Some("prose prose-slate")));
        assert!(!selector.matches("div", None));
    }

    #[test]
    fn display_round_trips_escapes() {
        let source = r".prose.dark\:prose-invert";
        let selector: ClassSelector = source.parse().unwrap();
        assert_eq!(selector.to_string(), source);
    }
}
