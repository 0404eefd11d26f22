// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Source text lookup by line number.

/// Precomputed line-start offsets for O(1) line lookup.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Byte offset of the start of each line. line_starts[0] is always 0.
    line_starts: Vec<usize>,
}

impl LineMap {
    /// Build a line map by scanning source for newlines. O(n).
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        LineMap { line_starts }
    }

    /// Text of a 1-based line, without its line terminator.
    pub fn line_text<'a>(&self, source: &'a str, line: usize) -> Option<&'a str> {
        let idx = line.checked_sub(1)?;
        let start = *self.line_starts.get(idx)?;
        let end = self
            .line_starts
            .get(idx + 1)
            .map(|&s| s.saturating_sub(1)) // exclude the \n
            .unwrap_or(source.len());
        let text = source.get(start..end)?;
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    /// Number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source() {
        let lm = LineMap::new("");
        assert_eq!(lm.line_count(), 1);
        assert_eq!(lm.line_text("", 1), Some(""));
        assert_eq!(lm.line_text("", 0), None);
    }

    #[test]
    fn multi_line() {
        let src = "abc\ndef\nghi";
        let lm = LineMap::new(src);
        assert_eq!(lm.line_count(), 3);
        assert_eq!(lm.line_text(src, 1), Some("abc"));
        assert_eq!(lm.line_text(src, 2), Some("def"));
        assert_eq!(lm.line_text(src, 3), Some("ghi"));
        assert_eq!(lm.line_text(src, 4), None);
    }

    #[test]
    fn crlf_line_endings() {
        let src = "a = 1\r\nb =\r\n";
        let lm = LineMap::new(src);
        assert_eq!(lm.line_text(src, 1), Some("a = 1"));
        assert_eq!(lm.line_text(src, 2), Some("b ="));
        // Line 3 is empty (after trailing newline)
        assert_eq!(lm.line_text(src, 3), Some(""));
    }
}
