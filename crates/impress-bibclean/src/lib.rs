//! Bibliography cleanup for reference-manager exports
//!
//! Takes a BibTeX file as written by Mendeley and produces a portable copy:
//! - local file attachment lines (`file = {...}`) are removed
//! - entries sharing a cite key collapse to the last one seen
//! - entries are written sorted by cite key, separated by blank lines
//!
//! The source is split on `@` rather than parsed as full BibTeX, so every
//! entry's text survives byte for byte apart from the removed lines.

mod cleaner;
mod config;
mod encoding;
mod entry;
mod error;
mod formatter;
pub mod parser;
mod pipeline;

pub use cleaner::{
    build_table, strip_attachments, CleanOptions, CleanReport, EntryTable,
    DEFAULT_ATTACHMENT_PREFIX,
};
pub use config::{CleanerConfig, DEFAULT_OUTPUT_PATH};
pub use encoding::{decode, ensure_ascii, EncodingPolicy};
pub use entry::{CleanedEntry, RawEntry};
pub use error::{CleanError, Result};
pub use formatter::{format_entries, format_table};
pub use parser::{extract_key, split_entries};
pub use pipeline::{clean_file, clean_path, clean_str, load_source, run, Cleaned};
