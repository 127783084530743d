//! Attachment stripping and the deduplicating entry table

use std::collections::BTreeMap;

use crate::entry::{CleanedEntry, RawEntry};
use crate::error::Result;
use crate::parser::extract_key;

/// Prefix Mendeley uses for local attachment paths
pub const DEFAULT_ATTACHMENT_PREFIX: &str = "file";

/// Options controlling which lines count as attachments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOptions {
    pub attachment_prefix: String,
    /// Ignore leading spaces and tabs when matching the prefix
    pub trim_indent: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            attachment_prefix: DEFAULT_ATTACHMENT_PREFIX.to_string(),
            trim_indent: true,
        }
    }
}

impl CleanOptions {
    /// Whether `line` is a file-attachment line
    pub fn is_attachment_line(&self, line: &str) -> bool {
        let candidate = if self.trim_indent {
            line.trim_start_matches([' ', '\t'])
        } else {
            line
        };
        candidate.starts_with(&self.attachment_prefix)
    }
}

/// Drop attachment lines from one raw entry and rebuild it with its `@`
pub fn strip_attachments(raw: &RawEntry<'_>, opts: &CleanOptions) -> Result<CleanedEntry> {
    let cite_key = extract_key(raw)?.to_string();

    let mut removed_lines = 0;
    let mut kept: Vec<&str> = raw
        .lines()
        .filter(|line| {
            let drop = opts.is_attachment_line(line);
            if drop {
                removed_lines += 1;
            }
            !drop
        })
        .collect();

    // Blank tail lines are separator, not entry content
    while kept.last().is_some_and(|line| line.trim().is_empty()) {
        kept.pop();
    }

    let mut text = String::with_capacity(raw.text.len() + 1);
    text.push('@');
    text.push_str(&kept.join("\n"));

    Ok(CleanedEntry {
        cite_key,
        text,
        removed_lines,
    })
}

/// Cleaned entries keyed by cite key, iterated in code-point order
#[derive(Debug, Default, Clone)]
pub struct EntryTable {
    entries: BTreeMap<String, String>,
}

impl EntryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the text it replaced if the key was taken
    pub fn insert(&mut self, entry: CleanedEntry) -> Option<String> {
        self.entries.insert(entry.cite_key, entry.text)
    }

    pub fn get(&self, cite_key: &str) -> Option<&str> {
        self.entries.get(cite_key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entry texts in sorted key order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }
}

/// Statistics from a single cleaning pass
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanReport {
    pub entries_read: usize,
    pub entries_written: usize,
    /// Keys that were overwritten by a later entry, in source order
    pub duplicate_keys: Vec<String>,
    pub attachment_lines_removed: usize,
}

/// Clean every raw entry into a table. The first malformed entry aborts.
pub fn build_table(
    raw_entries: &[RawEntry<'_>],
    opts: &CleanOptions,
) -> Result<(EntryTable, CleanReport)> {
    let mut table = EntryTable::new();
    let mut report = CleanReport {
        entries_read: raw_entries.len(),
        ..Default::default()
    };

    for raw in raw_entries {
        let cleaned = strip_attachments(raw, opts)?;
        report.attachment_lines_removed += cleaned.removed_lines;

        let key = cleaned.cite_key.clone();
        if table.insert(cleaned).is_some() {
            tracing::warn!(
                "Duplicate cite key {:?} at byte {}, keeping the later entry",
                key,
                raw.offset
            );
            report.duplicate_keys.push(key);
        }
    }

    report.entries_written = table.len();
    Ok((table, report))
}
