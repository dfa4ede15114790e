// src/core/markdown.rs
use regex::Regex;
use std::sync::LazyLock;

/// Glyph substituted for Markdown list item markers.
pub const BULLET: &str = "• ";

/// The stripping patterns, compiled once per process and reused for every
/// definition. Purely pattern-based: nested or unmatched markers may come
/// out imperfect, which is accepted behavior.
struct Patterns {
    bold: Regex,
    italic: Regex,
    link: Regex,
    code: Regex,
    heading: Regex,
    blockquote: Regex,
    list_marker: Regex,
    bullet: Regex,
}

static PATTERNS: LazyLock<Patterns> = LazyLock::new(|| Patterns {
    bold: Regex::new(r"\*\*(.*?)\*\*").unwrap(),
    italic: Regex::new(r"\*(.*?)\*").unwrap(),
    link: Regex::new(r"\[(.*?)\]\(.*?\)").unwrap(),
    code: Regex::new(r"`([^`]+)`").unwrap(),
    heading: Regex::new(r"#+\s").unwrap(),
    blockquote: Regex::new(r">\s*").unwrap(),
    list_marker: Regex::new(r"-\s+").unwrap(),
    bullet: Regex::new(r"\s*•\s*").unwrap(),
});

/// `**text**` -> `text`
pub fn strip_bold(text: &str) -> String {
    PATTERNS.bold.replace_all(text, "$1").into_owned()
}

/// `*text*` -> `text`. Must run after [`strip_bold`] or the bold markers
/// would be eaten one star at a time.
pub fn strip_italic(text: &str) -> String {
    PATTERNS.italic.replace_all(text, "$1").into_owned()
}

/// `[text](url)` -> `text`
pub fn strip_links(text: &str) -> String {
    PATTERNS.link.replace_all(text, "$1").into_owned()
}

/// `` `text` `` -> `text`
pub fn strip_inline_code(text: &str) -> String {
    PATTERNS.code.replace_all(text, "$1").into_owned()
}

/// Removes `#` heading markers (one or more hashes followed by a space).
pub fn strip_headings(text: &str) -> String {
    PATTERNS.heading.replace_all(text, "").into_owned()
}

/// Removes `>` blockquote markers and any whitespace after them.
pub fn strip_blockquotes(text: &str) -> String {
    PATTERNS.blockquote.replace_all(text, "").into_owned()
}

/// `- item` -> `• item`
pub fn bulletize_lists(text: &str) -> String {
    PATTERNS.list_marker.replace_all(text, BULLET).into_owned()
}

/// Forces every bullet (including those just produced by
/// [`bulletize_lists`]) onto its own line, with exactly one line break
/// before each glyph.
pub fn break_before_bullets(text: &str) -> String {
    PATTERNS.bullet.replace_all(text, "\n• ").into_owned()
}

/// Strips a raw Markdown-flavored definition down to plain text, applying
/// the substitutions in their fixed order, then trims the result. Embedded
/// newlines are converted to line breaks at display time.
pub fn format_definition(raw: &str) -> String {
    let text = strip_bold(raw);
    let text = strip_italic(&text);
    let text = strip_links(&text);
    let text = strip_inline_code(&text);
    let text = strip_headings(&text);
    let text = strip_blockquotes(&text);
    let text = bulletize_lists(&text);
    let text = break_before_bullets(&text);
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_and_italic_markers_are_stripped_in_order() {
        assert_eq!(strip_bold("**Foo** bar"), "Foo bar");
        assert_eq!(strip_italic("*em* text"), "em text");
        assert_eq!(format_definition("**Foo** is *great*"), "Foo is great");
    }

    #[test]
    fn links_keep_their_text() {
        assert_eq!(strip_links("see [the docs](https://x.y/z)"), "see the docs");
    }

    #[test]
    fn inline_code_markers_are_stripped() {
        assert_eq!(strip_inline_code("call `foo()` twice"), "call foo() twice");
    }

    #[test]
    fn heading_and_blockquote_markers_are_removed() {
        assert_eq!(strip_headings("## Term"), "Term");
        assert_eq!(strip_blockquotes("> quoted"), "quoted");
    }

    #[test]
    fn list_items_each_get_their_own_line() {
        assert_eq!(bulletize_lists("- one\n- two"), "• one\n• two");
        assert_eq!(format_definition("- one\n- two"), "• one\n• two");
    }

    #[test]
    fn bullets_after_intro_text_break_onto_new_lines() {
        assert_eq!(
            format_definition("Types:\n- one\n- two"),
            "Types:\n• one\n• two"
        );
    }

    #[test]
    fn malformed_markdown_is_not_special_cased() {
        // An unmatched star simply passes through.
        assert_eq!(format_definition("a * b"), "a * b");
    }

    #[test]
    fn output_is_trimmed() {
        assert_eq!(format_definition("  padded  "), "padded");
    }
}
