//! Short resource labels for note listings.
//!
//! A label is the first non-empty line, cut hard at a char bound. Unlike
//! `Title`, no Markdown marker is stripped and no truncation marker is added.
//! The cut is applied after trimming, so a label may end in whitespace.

use crate::text::trim_note;

/// Default label bound used for listing entries.
pub const DEFAULT_LABEL_MAX_CHARS: usize = 30;

/// Returns the first non-empty trimmed line, cut to `max_chars` chars.
///
/// Returns `None` when content has no visible text or `max_chars` is zero.
pub fn first_nonempty_line(content: &str, max_chars: usize) -> Option<&str> {
    if max_chars == 0 {
        return None;
    }

    let line = content
        .lines()
        .map(trim_note)
        .find(|line| !line.is_empty())?;

    let end = line
        .char_indices()
        .nth(max_chars)
        .map(|(index, _)| index)
        .unwrap_or(line.len());
    Some(&line[..end])
}

/// Returns the listing label for one note, or `fallback` without content.
pub fn resource_label(content: &str, max_chars: usize, fallback: &str) -> String {
    first_nonempty_line(content, max_chars)
        .unwrap_or(fallback)
        .to_string()
}
