//! Environment-driven runtime configuration.
//!
//! # Responsibility
//! - Resolve log level, log directory and label bound from env vars.
//! - Keep parsing testable through an injectable key lookup.
//!
//! # Invariants
//! - Log level is always one of `trace|debug|info|warn|error`; unknown
//!   level names fall back to `default_log_level()` instead of failing.
//! - `log_dir`, when present, is an absolute path.
//! - `label_max_chars` is positive.

use crate::logging::default_log_level;
use crate::text::label::DEFAULT_LABEL_MAX_CHARS;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Level keys, checked in order; the first non-empty one wins.
pub const LOG_LEVEL_KEYS: [&str; 4] = [
    "LOG_LEVEL",
    "NOTETITLE_LOG_LEVEL",
    "MCP_LOG_LEVEL",
    "LOGLEVEL",
];
/// Truthy value forces `debug` when no level key is set.
pub const DEBUG_KEY: &str = "DEBUG";
/// Absolute directory for rolling log files.
pub const LOG_DIR_KEY: &str = "NOTETITLE_LOG_DIR";
/// Listing label bound in characters.
pub const LABEL_MAX_CHARS_KEY: &str = "TITLE_MAX_LENGTH";

/// Configuration parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A key holds a value that cannot be used.
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, value, reason } => {
                write!(f, "invalid value `{value}` for {key}: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Normalized log level.
    pub log_level: &'static str,
    /// File logging target; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    /// Bound for listing labels.
    pub label_max_chars: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
            label_max_chars: DEFAULT_LABEL_MAX_CHARS,
        }
    }
}

impl CoreConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a key to its value.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();

        if let Some(level) = LOG_LEVEL_KEYS.into_iter().find_map(|key| get(key)) {
            config.log_level = parse_log_level(&level).unwrap_or_else(default_log_level);
        } else if get(DEBUG_KEY).is_some_and(|value| is_truthy(&value)) {
            config.log_level = "debug";
        }

        if let Some(dir) = get(LOG_DIR_KEY) {
            if !Path::new(&dir).is_absolute() {
                return Err(ConfigError::InvalidValue {
                    key: LOG_DIR_KEY,
                    value: dir,
                    reason: "must be an absolute path",
                });
            }
            config.log_dir = Some(PathBuf::from(dir));
        }

        if let Some(raw) = get(LABEL_MAX_CHARS_KEY) {
            config.label_max_chars = match raw.parse::<usize>() {
                Ok(value) if value > 0 => value,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: LABEL_MAX_CHARS_KEY,
                        value: raw,
                        reason: "expected a positive integer",
                    })
                }
            };
        }

        Ok(config)
    }
}

/// Maps a level name, including common aliases, to a backend level.
///
/// Returns `None` for names outside the known set.
pub fn parse_log_level(value: &str) -> Option<&'static str> {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" | "debugging" | "verbose" => Some("debug"),
        "info" | "information" => Some("info"),
        "warn" | "warning" => Some("warn"),
        "error" | "err" => Some("error"),
        _ => None,
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
