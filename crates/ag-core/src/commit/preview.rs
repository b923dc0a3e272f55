/// Number of characters of `content` kept in a preview.
pub const PREVIEW_CHARS: usize = 100;

/// Appended to a preview when `content` was cut.
pub const TRUNCATION_MARKER: &str = "...";

/// Builds the list preview for a piece of captured content.
///
/// Counts characters, not bytes: the cut never splits a multi-byte
/// character. Content of at most [`PREVIEW_CHARS`] characters is returned
/// verbatim.
pub fn derive_preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{}", &content[..cut], TRUNCATION_MARKER),
        None => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_is_kept_verbatim() {
        assert_eq!(derive_preview("fix the build"), "fix the build");
    }

    #[test]
    fn content_of_exactly_the_limit_is_not_marked() {
        let content = "x".repeat(PREVIEW_CHARS);
        assert_eq!(derive_preview(&content), content);
    }

    #[test]
    fn long_content_is_cut_and_marked() {
        let content = "A".repeat(150);
        let preview = derive_preview(&content);

        assert_eq!(preview.chars().count(), 103);
        assert!(preview.ends_with(TRUNCATION_MARKER));
        assert!(content.starts_with(preview.trim_end_matches('.')));
    }

    #[test]
    fn cut_respects_multibyte_characters() {
        let content = "剪".repeat(101);
        let preview = derive_preview(&content);

        assert_eq!(preview.chars().count(), PREVIEW_CHARS + TRUNCATION_MARKER.len());
        assert_eq!(&preview[..preview.len() - 3], "剪".repeat(100));
    }
}
