//! Source decoding
//!
//! Input is always decoded as UTF-8. Under [`EncodingPolicy::Ascii`] the text
//! must also be plain ASCII, and the first character outside it aborts the run.
//! No transliteration is attempted; the offending character has to be fixed
//! in the reference manager.

use std::path::Path;

use crate::error::{CleanError, Result};

/// How strictly the source text is checked after decoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EncodingPolicy {
    /// Keep full Unicode end to end
    #[default]
    Unicode,
    /// Reject anything outside 7-bit ASCII
    Ascii,
}

impl EncodingPolicy {
    pub fn from_ascii_only(ascii_only: bool) -> Self {
        if ascii_only {
            Self::Ascii
        } else {
            Self::Unicode
        }
    }
}

/// Decode raw source bytes according to `policy`
pub fn decode(bytes: Vec<u8>, path: &Path, policy: EncodingPolicy) -> Result<String> {
    let text = String::from_utf8(bytes).map_err(|e| CleanError::InvalidUtf8 {
        path: path.to_path_buf(),
        offset: e.utf8_error().valid_up_to(),
    })?;

    if policy == EncodingPolicy::Ascii {
        ensure_ascii(&text)?;
    }

    Ok(text)
}

/// Fail on the first non-ASCII character, reporting 1-based line and column
pub fn ensure_ascii(text: &str) -> Result<()> {
    for (line_idx, line) in text.split('\n').enumerate() {
        if let Some((col_idx, ch)) = line.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
            return Err(CleanError::NonAscii {
                ch,
                line: line_idx + 1,
                column: col_idx + 1,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_policy_keeps_text() {
        let text = "@article{Muller,\n  author = {Müller, Jörg}\n}";
        let decoded = decode(
            text.as_bytes().to_vec(),
            Path::new("lib.bib"),
            EncodingPolicy::Unicode,
        )
        .unwrap();
        assert_eq!(decoded, text);
    }

    #[test]
    fn test_ascii_policy_reports_position() {
        let text = "@article{Muller,\n  author = {Müller}\n}";
        let err = decode(
            text.as_bytes().to_vec(),
            Path::new("lib.bib"),
            EncodingPolicy::Ascii,
        )
        .unwrap_err();
        match err {
            CleanError::NonAscii { ch, line, column } => {
                assert_eq!(ch, 'ü');
                assert_eq!(line, 2);
                assert_eq!(column, 14);
            }
            other => panic!("expected NonAscii, got {other:?}"),
        }
    }

    #[test]
    fn test_ascii_policy_accepts_ascii() {
        assert!(ensure_ascii("@misc{a,\n  title = {Plain}\n}").is_ok());
    }

    #[test]
    fn test_invalid_utf8_offset() {
        let bytes = vec![b'@', b'a', 0xff, b'b'];
        let err = decode(bytes, Path::new("bad.bib"), EncodingPolicy::Unicode).unwrap_err();
        match err {
            CleanError::InvalidUtf8 { offset, .. } => assert_eq!(offset, 2),
            other => panic!("expected InvalidUtf8, got {other:?}"),
        }
    }

    #[test]
    fn test_policy_from_flag() {
        assert_eq!(EncodingPolicy::from_ascii_only(true), EncodingPolicy::Ascii);
        assert_eq!(
            EncodingPolicy::from_ascii_only(false),
            EncodingPolicy::Unicode
        );
    }
}
