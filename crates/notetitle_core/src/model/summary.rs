//! One-note summary projection.
//!
//! # Responsibility
//! - Bundle title, listing label and content-type hint for a single note.
//!
//! # Invariants
//! - Every field is derived from the same content snapshot.
//! - Serialized field names are stable: `title`, `label`, `hint`.

use crate::text::content_type::{content_type_hint, ContentTypeHint};
use crate::text::label::resource_label;
use crate::text::title::{extract_title, Title};
use serde::Serialize;

/// Derived presentation fields for one note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteSummary {
    /// Display title, never empty.
    pub title: Title,
    /// Short listing label, or the caller fallback for blank notes.
    pub label: String,
    /// Content-type classification of the body.
    pub hint: ContentTypeHint,
}

impl NoteSummary {
    /// Builds every projection from `content`.
    ///
    /// `fallback_label` is used when the note has no visible text, typically
    /// the note key or file name.
    pub fn from_content(content: &str, label_max_chars: usize, fallback_label: &str) -> Self {
        Self {
            title: extract_title(content),
            label: resource_label(content, label_max_chars, fallback_label),
            hint: content_type_hint(content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NoteSummary;
    use crate::text::content_type::ContentType;

    #[test]
    fn blank_note_uses_sentinel_title_and_fallback_label() {
        let summary = NoteSummary::from_content("  \n", 30, "note-42");
        assert!(summary.title.is_untitled());
        assert_eq!(summary.label, "note-42");
        assert_eq!(summary.hint.content_type, ContentType::PlainText);
    }

    #[test]
    fn title_and_label_differ_on_markdown_heading() {
        let summary = NoteSummary::from_content("# Groceries\n- milk\n- eggs", 30, "key");
        assert_eq!(summary.title, "Groceries");
        assert_eq!(summary.label, "# Groceries");
        assert_eq!(summary.hint.content_type, ContentType::Markdown);
    }
}
