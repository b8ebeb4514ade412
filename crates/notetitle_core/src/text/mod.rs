//! Single-note text projections.
//!
//! # Responsibility
//! - Derive presentable strings (title, listing label) from raw note content.
//! - Classify note bodies for rendering hints.
//!
//! # Invariants
//! - Every function here is pure and total over `&str` input.
//! - Trimming treats the ASCII separators U+001C..=U+001F as whitespace too.

pub mod content_type;
pub mod label;
pub mod title;

/// Whitespace test shared by title and label trimming.
pub(crate) fn is_note_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Trims note whitespace from both ends.
pub(crate) fn trim_note(value: &str) -> &str {
    value.trim_matches(is_note_whitespace)
}

#[cfg(test)]
mod tests {
    use super::trim_note;

    #[test]
    fn trim_note_strips_unicode_and_separator_whitespace() {
        assert_eq!(trim_note("\u{1c}\u{a0} body \u{1f}\n"), "body");
        assert_eq!(trim_note("\u{1d}\u{1e}"), "");
    }
}
