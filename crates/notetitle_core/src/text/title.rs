//! Note title extraction.
//!
//! # Responsibility
//! - Derive a short presentable title from raw note content.
//! - Strip one leading Markdown heading/list marker from the first line.
//!
//! # Invariants
//! - A `Title` is never empty or whitespace-only.
//! - A `Title` is at most `TITLE_MAX_CHARS` characters long.
//! - Lengths are counted in `char`s; truncation never splits a character.
//! - Whitespace includes the separators U+001C..=U+001F.
//! - Extraction is total and side-effect free.

use crate::text::trim_note;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Sentinel title for empty or degenerate content.
pub const UNTITLED: &str = "Untitled";
/// Upper bound for title length, marker included.
pub const TITLE_MAX_CHARS: usize = 50;
/// Appended when the first line is cut.
pub const TRUNCATION_MARKER: &str = "...";

// Only one marker is removed: "## - Title" keeps "- Title".
static LEADING_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:#+[\s\x1C-\x1F]*|[*\-+][\s\x1C-\x1F]*)")
        .expect("valid leading marker regex")
});

/// Derived note title.
///
/// Only `extract_title` constructs this type, so every value upholds the
/// length and non-empty invariants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    fn untitled() -> Self {
        Self(UNTITLED.to_string())
    }

    /// Borrows the title text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the title and returns the owned text.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns whether this is the sentinel fallback.
    pub fn is_untitled(&self) -> bool {
        self.0 == UNTITLED
    }

    /// Title length in characters.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl Display for Title {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Title> for String {
    fn from(value: Title) -> Self {
        value.0
    }
}

impl PartialEq<str> for Title {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Title {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for Title {
    fn eq(&self, other: &String) -> bool {
        &self.0 == other
    }
}

/// Extracts a title from note content.
///
/// Rules:
/// - empty or whitespace-only content -> `"Untitled"`.
/// - the trimmed content's first line is trimmed and loses one leading
///   `#`-run or bullet (`*`, `-`, `+`) with the whitespace after it.
/// - an empty remainder -> `"Untitled"`.
/// - a remainder over 50 chars keeps 47 chars plus `"..."`.
pub fn extract_title(content: &str) -> Title {
    let trimmed = trim_note(content);
    if trimmed.is_empty() {
        return Title::untitled();
    }

    let first_line = trim_note(trimmed.split('\n').next().unwrap_or_default());
    let without_marker = LEADING_MARKER_RE.replace(first_line, "");
    if without_marker.is_empty() {
        return Title::untitled();
    }

    Title(truncate_with_marker(&without_marker))
}

fn truncate_with_marker(value: &str) -> String {
    if value.chars().count() <= TITLE_MAX_CHARS {
        return value.to_string();
    }

    let keep = TITLE_MAX_CHARS - TRUNCATION_MARKER.chars().count();
    let mut truncated = value.chars().take(keep).collect::<String>();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}

#[cfg(test)]
mod tests {
    use super::{extract_title, truncate_with_marker, TITLE_MAX_CHARS, UNTITLED};

    #[test]
    fn blank_content_falls_back_to_sentinel() {
        assert_eq!(extract_title(""), UNTITLED);
        assert_eq!(extract_title("   \n  "), UNTITLED);
        assert_eq!(extract_title("\t\r\n"), UNTITLED);
        assert!(extract_title("").is_untitled());
    }

    #[test]
    fn bare_marker_falls_back_to_sentinel() {
        assert_eq!(extract_title("#"), UNTITLED);
        assert_eq!(extract_title("###   \nbody"), UNTITLED);
        assert_eq!(extract_title("- "), UNTITLED);
    }

    #[test]
    fn heading_and_bullet_markers_are_stripped() {
        assert_eq!(extract_title("# Heading\nBody"), "Heading");
        assert_eq!(extract_title("###Tight heading"), "Tight heading");
        assert_eq!(extract_title("- item"), "item");
        assert_eq!(extract_title("* star item"), "star item");
        assert_eq!(extract_title("+ plus item"), "plus item");
    }

    #[test]
    fn only_one_leading_marker_is_stripped() {
        assert_eq!(extract_title("## - Title"), "- Title");
        assert_eq!(extract_title("-- double dash"), "- double dash");
        assert_eq!(extract_title("Title # not a marker"), "Title # not a marker");
    }

    #[test]
    fn leading_blank_lines_are_skipped() {
        assert_eq!(extract_title("\n\n  Real title  \nbody"), "Real title");
    }

    #[test]
    fn ascii_separators_count_as_whitespace() {
        assert_eq!(extract_title("\u{1c}"), UNTITLED);
        assert_eq!(extract_title("\u{1f}# \u{1e}Heading\u{1d}\nbody"), "Heading");
    }

    #[test]
    fn crlf_line_endings_do_not_leak() {
        assert_eq!(extract_title("Windows title\r\nbody"), "Windows title");
    }

    #[test]
    fn long_first_line_is_truncated_with_marker() {
        let title = extract_title(&"A".repeat(60));
        assert_eq!(title, format!("{}...", "A".repeat(47)));
        assert_eq!(title.char_len(), TITLE_MAX_CHARS);
    }

    #[test]
    fn exactly_fifty_chars_is_kept_whole() {
        let line = "b".repeat(50);
        assert_eq!(extract_title(&line), line);
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let truncated = truncate_with_marker(&"é".repeat(55));
        assert_eq!(truncated.chars().count(), TITLE_MAX_CHARS);
        assert!(truncated.starts_with(&"é".repeat(47)));
        assert!(truncated.ends_with("..."));
    }
}
