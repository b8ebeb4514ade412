//! Content-type detection for note bodies.
//!
//! # Responsibility
//! - Classify one note body into a coarse `ContentType`.
//! - Provide a serializable hint (`content_type` + MIME-like `format`).
//!
//! # Invariants
//! - Detection is total: blank or unrecognized content is `PlainText`.
//! - Checks run in fixed priority order:
//!   JSON, HTML, YAML, fenced Markdown, code, Markdown, plain text.
//! - Indentation is ignored line by line.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

const HTML_TAGS: &[&str] = &[
    "a", "body", "br", "div", "em", "h1", "h2", "h3", "h4", "h5", "h6", "head", "html", "img",
    "li", "ol", "p", "span", "strong", "table", "td", "title", "tr", "ul",
];
const YAML_MIN_LINE_RATIO_PERCENT: usize = 80;
const CODE_MIN_LINES: usize = 2;

static HTML_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</?([a-z][a-z0-9]*)\b[^>]*>").expect("valid html tag regex"));
static YAML_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][\w\-]*:(?:\s.*)?$").expect("valid yaml key regex"));
static YAML_OTHER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:---|\.\.\.|#.*|-\s.*|-)$").expect("valid yaml line regex"));
static CODE_KEYWORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:def|class|fn|pub|impl|struct|function|import|return|let|const|var|package|using|elif|except|try|#include)\b",
    )
    .expect("valid code keyword regex")
});
static CODE_ASSIGN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][\w.\[\]]*\s*(?:=|\+=|-=|:=)\s*[^=\s]")
        .expect("valid code assignment regex")
});
static CODE_CALL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][\w.:]*\(.*\)\s*;?$").expect("valid code call regex"));
static CODE_TERMINATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\S;|\)\s*\{)$").expect("valid code terminator regex"));
static MD_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{1,6}\s+\S").expect("valid markdown heading regex"));
static MD_LIST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[-*+]|\d+[.)])\s+\S").expect("valid markdown list regex"));
static MD_INLINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[[^\]]+\]\([^)]+\)|(?:\*\*|__)[^*_]+(?:\*\*|__)|\*[^*\s][^*]*\*|`[^`]+`")
        .expect("valid markdown inline regex")
});

/// Coarse note body classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// Prose or anything unrecognized.
    PlainText,
    /// Markdown-formatted text.
    Markdown,
    /// Source code.
    Code,
    /// A valid JSON document.
    Json,
    /// A YAML mapping or sequence.
    Yaml,
    /// An HTML document or fragment.
    Html,
}

impl ContentType {
    /// Stable snake_case name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PlainText => "plain_text",
            Self::Markdown => "markdown",
            Self::Code => "code",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Html => "html",
        }
    }

    /// MIME-like format string for this content type.
    pub fn format(self) -> &'static str {
        match self {
            Self::PlainText => "text/plain",
            Self::Markdown => "text/markdown",
            Self::Code => "text/x-code",
            Self::Json => "application/json",
            Self::Yaml => "application/yaml",
            Self::Html => "text/html",
        }
    }
}

impl Display for ContentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata attached to a note for client-side rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentTypeHint {
    /// Detected content type.
    pub content_type: ContentType,
    /// MIME-like format string.
    pub format: &'static str,
}

impl From<ContentType> for ContentTypeHint {
    fn from(content_type: ContentType) -> Self {
        Self {
            content_type,
            format: content_type.format(),
        }
    }
}

/// Classifies note content.
pub fn detect_content_type(content: &str) -> ContentType {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return ContentType::PlainText;
    }

    let lines = trimmed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>();

    if is_likely_json(trimmed) {
        ContentType::Json
    } else if is_likely_html(trimmed) {
        ContentType::Html
    } else if is_likely_yaml(&lines) {
        ContentType::Yaml
    } else if has_fenced_block(&lines) {
        ContentType::Markdown
    } else if is_likely_code(&lines) {
        ContentType::Code
    } else if is_likely_markdown(&lines) {
        ContentType::Markdown
    } else {
        ContentType::PlainText
    }
}

/// Returns the content-type hint for one note body.
pub fn content_type_hint(content: &str) -> ContentTypeHint {
    detect_content_type(content).into()
}

fn is_likely_json(trimmed: &str) -> bool {
    if !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
        return false;
    }
    serde_json::from_str::<serde_json::Value>(trimmed).is_ok()
}

fn is_likely_html(trimmed: &str) -> bool {
    let head = trimmed
        .chars()
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();
    if head.starts_with("<!doctype html") || head.starts_with("<html") {
        return true;
    }

    let tags = HTML_TAG_RE
        .captures_iter(trimmed)
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str().to_ascii_lowercase())
        .filter(|name| HTML_TAGS.contains(&name.as_str()))
        .collect::<BTreeSet<_>>();
    tags.len() >= 2
}

fn is_likely_yaml(lines: &[&str]) -> bool {
    let key_lines = lines.iter().filter(|line| YAML_KEY_RE.is_match(line)).count();
    if key_lines == 0 {
        return false;
    }

    let yaml_lines = lines
        .iter()
        .filter(|line| YAML_KEY_RE.is_match(line) || YAML_OTHER_RE.is_match(line))
        .count();
    let has_document_marker = lines.first().is_some_and(|line| *line == "---");

    yaml_lines * 100 >= lines.len() * YAML_MIN_LINE_RATIO_PERCENT
        && (key_lines >= 2 || has_document_marker)
}

fn has_fenced_block(lines: &[&str]) -> bool {
    lines
        .iter()
        .any(|line| line.starts_with("```") || line.starts_with("~~~"))
}

fn is_code_line(line: &str) -> bool {
    CODE_KEYWORD_RE.is_match(line)
        || CODE_ASSIGN_RE.is_match(line)
        || CODE_CALL_RE.is_match(line)
        || CODE_TERMINATOR_RE.is_match(line)
}

fn is_likely_code(lines: &[&str]) -> bool {
    let code_lines = lines.iter().filter(|line| is_code_line(line)).count();
    code_lines >= CODE_MIN_LINES && code_lines * 2 >= lines.len()
}

fn is_likely_markdown(lines: &[&str]) -> bool {
    lines.iter().any(|line| {
        MD_HEADING_RE.is_match(line)
            || MD_LIST_RE.is_match(line)
            || line.starts_with('>')
            || MD_INLINE_RE.is_match(line)
    })
}
