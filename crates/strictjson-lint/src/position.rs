//! Byte offset to line/column conversion.

/// A 1-based line and column in a source text.
///
/// Always derived from an offset into the full text, never tracked
/// incrementally by a scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Computes the position of `offset` (a byte index) in `text`.
    ///
    /// The line is one more than the number of `\n` before the offset. The
    /// column counts characters, not bytes, from the start of that line.
    /// Offsets past the end clamp to the end of the text; offsets inside a
    /// multi-byte character clamp back to the start of that character.
    pub fn from_offset(text: &str, offset: usize) -> Self {
        let mut offset = offset.min(text.len());
        while !text.is_char_boundary(offset) {
            offset -= 1;
        }

        let before = &text[..offset];
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);

        Self {
            line: before.matches('\n').count() + 1,
            column: before[line_start..].chars().count() + 1,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
