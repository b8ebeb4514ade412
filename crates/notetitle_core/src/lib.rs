//! Title and presentation helpers for free-text notes.
//! Every projection here is derived from a single note body.

pub mod config;
pub mod logging;
pub mod model;
pub mod text;

pub use config::{parse_log_level, ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging};
pub use model::summary::NoteSummary;
pub use text::content_type::{content_type_hint, detect_content_type, ContentType, ContentTypeHint};
pub use text::label::{first_nonempty_line, resource_label, DEFAULT_LABEL_MAX_CHARS};
pub use text::title::{extract_title, Title, TITLE_MAX_CHARS, TRUNCATION_MARKER, UNTITLED};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
