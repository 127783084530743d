//! Output formatting
//!
//! Entries are written in key order with one blank line between them and a
//! single trailing newline. Feeding the result back through the cleaner gives
//! the same text.

use crate::cleaner::EntryTable;

/// Render the whole table as bibliography text
pub fn format_table(table: &EntryTable) -> String {
    format_entries(table.texts())
}

/// Join already-cleaned entry texts
pub fn format_entries<'a>(entries: impl IntoIterator<Item = &'a str>) -> String {
    let mut result = entries.into_iter().collect::<Vec<_>>().join("\n\n");
    if !result.is_empty() {
        result.push('\n');
    }
    result
}
