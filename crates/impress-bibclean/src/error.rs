//! Error types for the cleaning pipeline

use std::path::PathBuf;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, CleanError>;

/// Every failure is terminal for a run; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8 (first bad byte at offset {offset})", .path.display())]
    InvalidUtf8 { path: PathBuf, offset: usize },

    #[error(
        "non-ASCII character {ch:?} (U+{:04X}) at line {line}, column {column}; fix it in the source library",
        codepoint(.ch)
    )]
    NonAscii { ch: char, line: usize, column: usize },

    #[error("malformed entry at byte {offset}: {reason} in {snippet:?}")]
    MalformedEntry {
        offset: usize,
        snippet: String,
        reason: &'static str,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

fn codepoint(ch: &char) -> u32 {
    u32::from(*ch)
}

impl CleanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
