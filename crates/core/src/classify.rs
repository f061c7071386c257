//! Best-effort content type detection for pasted text.
//!
//! [`classify`] runs a fixed, ordered list of pattern checks and returns the
//! first match. It is total: any input (including empty text) yields a type,
//! with [`ItemType::Note`] as the fallback.

use std::sync::LazyLock;

use regex::Regex;

use crate::item::ItemType;

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

/// Text that starts with an HTTP(S) scheme.
pub const LINK_PATTERN: &str = r"(?i)^https?://";

/// A line that opens like source code: a declaration keyword, a JSX element
/// with an uppercase tag, an object literal, or a Python `def`/`class`.
pub const CODE_PATTERN: &str = concat!(
    r"(?m)^[ \t]*(?:",
    r"(?:import|export|const|let|var|function|interface|type|enum)\s",
    r"|async\s+function\s",
    r"|<[A-Z]",
    r"|\{",
    r"|def\s",
    r"|class\s",
    r")",
);

/// An uppercase-initial JSX-like tag anywhere in the text.
pub const COMPONENT_PATTERN: &str = r"<[A-Z][A-Za-z0-9_.]*(?:[\s/>]|$)";

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(LINK_PATTERN).expect("valid regex"));
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(CODE_PATTERN).expect("valid regex"));
static COMPONENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(COMPONENT_PATTERN).expect("valid regex"));

/// Longest title produced by [`derive_title`], in characters.
pub const MAX_TITLE_CHARS: usize = 60;

/// Title used when the content has no non-blank line.
pub const UNTITLED: &str = "Untitled";

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify raw text into an item type. First matching rule wins:
/// link, then code, then component, then note.
pub fn classify(text: &str) -> ItemType {
    let trimmed = text.trim();

    if LINK_RE.is_match(trimmed) {
        ItemType::Link
    } else if CODE_RE.is_match(text) {
        ItemType::Code
    } else if COMPONENT_RE.is_match(text) {
        ItemType::Component
    } else {
        ItemType::Note
    }
}

// ---------------------------------------------------------------------------
// Titles
// ---------------------------------------------------------------------------

/// Derive a display title from item content.
///
/// Links use their address without the scheme; everything else uses the
/// first non-blank line. The result is truncated to [`MAX_TITLE_CHARS`].
pub fn derive_title(content: &str, item_type: ItemType) -> String {
    let first_line = content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty());

    let Some(line) = first_line else {
        return UNTITLED.to_string();
    };

    let line = match item_type {
        ItemType::Link => strip_scheme(line),
        _ => line,
    };

    truncate_chars(line, MAX_TITLE_CHARS)
}

fn strip_scheme(url: &str) -> &str {
    let rest = LINK_RE.find(url).map_or(url, |m| &url[m.end()..]);
    rest.trim_end_matches('/')
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- link --

    #[test]
    fn https_url_is_link() {
        assert_eq!(classify("https://example.com/page"), ItemType::Link);
    }

    #[test]
    fn scheme_is_case_insensitive_and_trimmed() {
        assert_eq!(classify("   HTTP://Example.com  \n"), ItemType::Link);
        assert_eq!(classify("\tHttpS://x.com"), ItemType::Link);
    }

    #[test]
    fn link_rule_wins_over_code_lines() {
        assert_eq!(
            classify("https://x.com\nimport foo from 'bar'"),
            ItemType::Link
        );
    }

    #[test]
    fn url_in_middle_of_text_is_not_link() {
        assert_eq!(
            classify("read this later: https://example.com"),
            ItemType::Note
        );
    }

    // -- code --

    #[test]
    fn import_line_is_code() {
        assert_eq!(classify("import React from 'react';"), ItemType::Code);
    }

    #[test]
    fn declaration_on_later_line_is_code() {
        let text = "helper for dates\nconst format = (d) => d.toISOString();";
        assert_eq!(classify(text), ItemType::Code);
    }

    #[test]
    fn object_literal_is_code() {
        assert_eq!(classify("{\n  \"name\": \"saveit\"\n}"), ItemType::Code);
    }

    #[test]
    fn python_def_and_class_are_code() {
        assert_eq!(classify("def main():\n    pass"), ItemType::Code);
        assert_eq!(classify("class Foo:\n    x = 1"), ItemType::Code);
    }

    #[test]
    fn leading_jsx_element_is_code() {
        assert_eq!(classify("<Button onClick={go}>Go</Button>"), ItemType::Code);
    }

    #[test]
    fn keyword_must_be_followed_by_whitespace() {
        assert_eq!(classify("imported goods arrived today"), ItemType::Note);
    }

    // -- component --

    #[test]
    fn inline_jsx_tag_is_component() {
        assert_eq!(
            classify("wrap the list in a <Card> with padding"),
            ItemType::Component
        );
    }

    #[test]
    fn lowercase_html_tag_is_not_component() {
        assert_eq!(classify("use a <div> here"), ItemType::Note);
    }

    // -- note --

    #[test]
    fn plain_prose_is_note() {
        assert_eq!(classify("Remember to call the dentist"), ItemType::Note);
    }

    #[test]
    fn empty_text_is_note() {
        assert_eq!(classify(""), ItemType::Note);
        assert_eq!(classify("   \n  "), ItemType::Note);
    }

    // -- derive_title --

    #[test]
    fn title_is_first_non_blank_line() {
        assert_eq!(
            derive_title("\n\n  Shopping list  \nmilk", ItemType::Note),
            "Shopping list"
        );
    }

    #[test]
    fn link_title_drops_scheme_and_trailing_slash() {
        assert_eq!(
            derive_title("https://example.com/docs/", ItemType::Link),
            "example.com/docs"
        );
    }

    #[test]
    fn long_title_is_truncated() {
        let title = derive_title(&"a".repeat(200), ItemType::Note);
        assert_eq!(title.chars().count(), MAX_TITLE_CHARS);
        assert!(title.ends_with("..."));
    }

    #[test]
    fn truncation_respects_multibyte_chars() {
        let title = derive_title(&"é".repeat(100), ItemType::Note);
        assert_eq!(title.chars().count(), MAX_TITLE_CHARS);
    }

    #[test]
    fn blank_content_is_untitled() {
        assert_eq!(derive_title("   ", ItemType::Code), UNTITLED);
    }
}
