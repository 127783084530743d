//! Fragment splitting and cite key extraction
//!
//! The source is not parsed as full BibTeX. Every `@` starts a new fragment
//! and whatever precedes the first `@` is dropped. This mirrors what the
//! reference manager export looks like: one entry per `@`, no `@string` or
//! `@comment` blocks. An `@` inside a field value still starts a fragment.
//! That fragment is rejected only when no `{` ... `,` follows it; otherwise
//! the entry is cut in two and both halves are kept.

use nom::{
    bytes::complete::{tag, take_until},
    IResult,
};

use crate::entry::RawEntry;
use crate::error::{CleanError, Result};

/// Split source text into raw entries, discarding the preamble
pub fn split_entries(input: &str) -> Vec<RawEntry<'_>> {
    let starts: Vec<usize> = input.match_indices('@').map(|(pos, _)| pos).collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(input.len());
            RawEntry::new(start, &input[start + 1..end])
        })
        .collect()
}

/// Extract the cite key: the text between the first `{` and the next `,`
pub fn extract_key<'a>(entry: &RawEntry<'a>) -> Result<&'a str> {
    let (after_brace, _) = open_brace(entry.text)
        .map_err(|_| malformed(entry, "missing '{' before cite key"))?;
    let (_, key) = key_until_comma(after_brace)
        .map_err(|_| malformed(entry, "missing ',' after cite key"))?;
    Ok(key)
}

/// Consume everything up to and including the first `{`
fn open_brace(input: &str) -> IResult<&str, &str> {
    let (rest, head) = take_until("{")(input)?;
    let (rest, _) = tag("{")(rest)?;
    Ok((rest, head))
}

/// Take the key up to (not including) the next `,`
fn key_until_comma(input: &str) -> IResult<&str, &str> {
    take_until(",")(input)
}

fn malformed(entry: &RawEntry<'_>, reason: &'static str) -> CleanError {
    CleanError::MalformedEntry {
        offset: entry.offset,
        snippet: entry.snippet(),
        reason,
    }
}
