//! Byte offset ↔ line/column conversion.

use text_size::{TextRange, TextSize};

use super::position::{Position, Span};

/// Line start table for one source text.
///
/// Columns are reported in UTF-16 code units, the unit LSP clients expect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::new(offset as u32 + 1));
            }
        }
        Self { line_starts }
    }

    /// Number of lines (a trailing newline opens an empty last line)
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Start offset of a 0-indexed line
    pub fn line_start(&self, line: u32) -> Option<TextSize> {
        self.line_starts.get(line as usize).copied()
    }

    /// Convert a byte offset into a line/column position.
    ///
    /// `text` must be the same text the index was built from.
    pub fn position(&self, text: &str, offset: TextSize) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let start = usize::from(self.line_starts[line]);
        let end = usize::from(offset).min(text.len());
        let column = text[start..end].encode_utf16().count() as u32;
        Position::new(line as u32, column)
    }

    pub fn span(&self, text: &str, range: TextRange) -> Span {
        Span::new(
            self.position(text, range.start()),
            self.position(text, range.end()),
        )
    }
}
