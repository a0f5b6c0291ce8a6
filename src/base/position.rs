//! Position tracking for highlighted spans
//!
//! Stores line/column locations so editor integrations can address spans
//! without re-scanning the source.

/// A span representing a range in source code (0-indexed for LSP compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// A position in source code (0-indexed, column in UTF-16 code units)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a span from line/column coordinates
    pub fn from_coords(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start: Position::new(start_line, start_col),
            end: Position::new(end_line, end_col),
        }
    }

    /// Check if a position falls within this span
    pub fn contains(&self, position: Position) -> bool {
        position >= self.start && position <= self.end
    }

    /// True when the span starts and ends on the same line
    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}
