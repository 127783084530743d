//! Load, clean and write a bibliography in one pass

use std::path::Path;

use crate::cleaner::{build_table, CleanOptions, CleanReport};
use crate::config::CleanerConfig;
use crate::encoding::{decode, EncodingPolicy};
use crate::error::{CleanError, Result};
use crate::formatter::format_table;
use crate::parser::split_entries;

/// Cleaned bibliography text plus what happened to produce it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleaned {
    pub text: String,
    pub report: CleanReport,
}

/// Clean bibliography text held in memory
pub fn clean_str(source: &str, opts: &CleanOptions) -> Result<Cleaned> {
    let raw_entries = split_entries(source);
    tracing::debug!("Split source into {} fragments", raw_entries.len());

    let (table, report) = build_table(&raw_entries, opts)?;
    Ok(Cleaned {
        text: format_table(&table),
        report,
    })
}

/// Read and decode a source file
pub fn load_source(path: &Path, policy: EncodingPolicy) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| CleanError::io(path, e))?;
    tracing::debug!("Read {} bytes from {:?}", bytes.len(), path);
    decode(bytes, path, policy)
}

/// Clean `source` and return the result without writing anything
pub fn clean_path(source: &Path, opts: &CleanOptions, policy: EncodingPolicy) -> Result<Cleaned> {
    let text = load_source(source, policy)?;
    clean_str(&text, opts)
}

/// Clean `source` into `dest`, replacing any existing file
pub fn clean_file(
    source: &Path,
    dest: &Path,
    opts: &CleanOptions,
    policy: EncodingPolicy,
) -> Result<CleanReport> {
    let cleaned = clean_path(source, opts, policy)?;
    std::fs::write(dest, &cleaned.text).map_err(|e| CleanError::io(dest, e))?;
    tracing::debug!("Wrote {} bytes to {:?}", cleaned.text.len(), dest);
    Ok(cleaned.report)
}

/// Run a full cleaning pass as described by `config`
pub fn run(config: &CleanerConfig) -> Result<CleanReport> {
    config.validate()?;
    let source = config
        .source_path
        .as_deref()
        .ok_or_else(|| CleanError::Config("no source bibliography given".to_string()))?;

    let report = clean_file(
        source,
        &config.output_path,
        &config.clean_options(),
        config.encoding_policy(),
    )?;

    tracing::info!(
        "Cleaned {:?} -> {:?}: {} entries read, {} written, {} duplicates, {} attachment lines removed",
        source,
        config.output_path,
        report.entries_read,
        report.entries_written,
        report.duplicate_keys.len(),
        report.attachment_lines_removed
    );
    Ok(report)
}
