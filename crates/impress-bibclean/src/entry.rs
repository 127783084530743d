//! Entry data structures

/// One `@`-delimited fragment of the source, before cleaning.
///
/// `text` excludes the leading `@`; `offset` is the byte position of that
/// `@` in the source so errors can point back at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry<'a> {
    pub offset: usize,
    pub text: &'a str,
}

impl<'a> RawEntry<'a> {
    pub fn new(offset: usize, text: &'a str) -> Self {
        Self { offset, text }
    }

    /// First line of the fragment, clipped for error messages
    pub fn snippet(&self) -> String {
        const MAX_CHARS: usize = 60;
        let first_line = self.text.lines().next().unwrap_or("");
        first_line.chars().take(MAX_CHARS).collect()
    }

    /// Lines of the fragment, split on `\n` only
    pub fn lines(&self) -> impl Iterator<Item = &'a str> {
        self.text.split('\n')
    }
}

/// An entry after attachment lines have been dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedEntry {
    pub cite_key: String,
    /// Entry text including the leading `@`
    pub text: String,
    /// Number of lines removed from the raw fragment
    pub removed_lines: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_is_first_line() {
        let raw = RawEntry::new(0, "article{Smith2024,\n  title = {A Paper}\n}");
        assert_eq!(raw.snippet(), "article{Smith2024,");
    }

    #[test]
    fn test_snippet_is_clipped() {
        let long = "x".repeat(200);
        let raw = RawEntry::new(0, &long);
        assert_eq!(raw.snippet().len(), 60);
    }

    #[test]
    fn test_lines_keep_carriage_returns() {
        let raw = RawEntry::new(0, "misc{a,\r\n  title = {T}\r\n}");
        let lines: Vec<_> = raw.lines().collect();
        assert_eq!(lines, vec!["misc{a,\r", "  title = {T}\r", "}"]);
    }
}
