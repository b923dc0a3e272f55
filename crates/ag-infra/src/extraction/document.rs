use std::ops::Range;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::selector::ClassSelector;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Attribute list of a start tag. Quoted values may contain `>`, as in
/// Tailwind's `[&>p]:mt-0`.
const ATTRIBUTES: &str =
    r#"(?:\s+[^\s"'>/=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'>]+))?)*"#;

fn start_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"<([A-Za-z][A-Za-z0-9-]*)({ATTRIBUTES})\s*/?>")).unwrap()
    })
}

fn class_attr_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)(?:^|\s)class\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#).unwrap()
    })
}

fn hidden_block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<!--.*?-->|<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>")
            .unwrap()
    })
}

fn pre_block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<pre\b[^>]*>.*?</pre\s*>").unwrap())
}

fn line_break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)<br\s*/?>|</(?:p|div|li|h[1-6]|pre|blockquote|tr|ul|ol|table|section|article|header|footer)\s*>",
        )
        .unwrap()
    })
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

fn any_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").unwrap())
}

fn entity_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[A-Za-z]+);").unwrap())
}

fn blank_lines_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{3,}").unwrap())
}

/// A loaded HTML page that can be searched with [`ClassSelector`]s.
///
/// This is a tag scanner, not a full HTML parser: it expects reasonably
/// well-formed markup, which is what rendered pages provide. Markup inside
/// scripts, styles and comments is never matched.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    html: String,
}

impl HtmlDocument {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Text of the first element matching `selector`, in document order.
    ///
    /// Returns `None` when no element matches or the first match has no
    /// visible text.
    pub fn select_text(&self, selector: &ClassSelector) -> Option<String> {
        let hidden = self.hidden_spans();

        let element = start_tag_re().captures_iter(&self.html).find(|caps| {
            let Some(whole) = caps.get(0) else {
                return false;
            };
            if in_spans(&hidden, whole.start()) {
                return false;
            }
            let class_attr = caps
                .get(2)
                .and_then(|attrs| class_attribute(attrs.as_str()));
            selector.matches(&caps[1], class_attr.as_deref())
        })?;

        let whole = element.get(0)?;
        let tag = element[1].to_ascii_lowercase();
        if whole.as_str().ends_with("/>") || VOID_ELEMENTS.contains(&tag.as_str()) {
            return None;
        }

        let inner_start = whole.end();
        let inner_end = self
            .closing_tag_offset(&tag, inner_start, &hidden)
            .unwrap_or(self.html.len());
        let text = html_to_text(&self.html[inner_start..inner_end]);

        (!text.is_empty()).then_some(text)
    }

    fn hidden_spans(&self) -> Vec<Range<usize>> {
        hidden_block_re()
            .find_iter(&self.html)
            .map(|m| m.range())
            .collect()
    }

    /// Byte offset of the tag closing an element opened just before `from`.
    fn closing_tag_offset(&self, tag: &str, from: usize, hidden: &[Range<usize>]) -> Option<usize> {
        let same_tag = Regex::new(&format!(
            r"(?i)<(/?){}(?:{ATTRIBUTES})\s*/?>",
            regex::escape(tag)
        ))
        .ok()?;

        let mut depth = 1usize;
        for caps in same_tag.captures_iter(&self.html[from..]) {
            let whole = caps.get(0)?;
            if in_spans(hidden, from + whole.start()) {
                continue;
            }
            if !caps[1].is_empty() {
                depth -= 1;
                if depth == 0 {
                    return Some(from + whole.start());
                }
            } else if !whole.as_str().ends_with("/>") {
                depth += 1;
            }
        }
        None
    }
}

fn in_spans(spans: &[Range<usize>], offset: usize) -> bool {
    spans.iter().any(|span| span.contains(&offset))
}

fn class_attribute(attrs: &str) -> Option<String> {
    let caps = class_attr_re().captures(attrs)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))
        .map(|m| m.as_str().to_string())
}

/// Visible text of an HTML fragment, roughly what a browser's `innerText`
/// gives: source whitespace collapses, block ends and `<br>` become
/// newlines, markup is dropped and entities are decoded. `<pre>` keeps its
/// layout.
pub(crate) fn html_to_text(fragment: &str) -> String {
    let visible = hidden_block_re().replace_all(fragment, "");

    let mut text = String::new();
    let mut last = 0;
    for pre in pre_block_re().find_iter(&visible) {
        text.push_str(&flow_text(&visible[last..pre.start()]));
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(&preformatted_text(pre.as_str()));
        last = pre.end();
    }
    text.push_str(&flow_text(&visible[last..]));

    blank_lines_re()
        .replace_all(&text, "\n\n")
        .trim()
        .to_string()
}

fn flow_text(html: &str) -> String {
    let collapsed = whitespace_re().replace_all(html, " ");
    let broken = line_break_re().replace_all(&collapsed, "\n");
    let stripped = any_tag_re().replace_all(&broken, "");

    decode_entities(&stripped)
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
}

fn preformatted_text(html: &str) -> String {
    let broken = line_break_re().replace_all(html, "\n");
    let stripped = any_tag_re().replace_all(&broken, "");

    decode_entities(&stripped)
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        + "\n"
}

fn decode_entities(text: &str) -> String {
    entity_re()
        .replace_all(text, |caps: &Captures| {
            let name = &caps[1];
            let decoded = if let Some(hex) = name
                .strip_prefix("#x")
                .or_else(|| name.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = name.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                named_entity(name)
            };
            decoded.map_or_else(|| caps[0].to_string(), |c| c.to_string())
        })
        .into_owned()
}

fn named_entity(name: &str) -> Option<char> {
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        "hellip" => '…',
        "mdash" => '—',
        "ndash" => '–',
        "copy" => '©',
        _ => return None,
    };
    Some(c)
}
