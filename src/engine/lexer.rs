//! Logos-based word splitter
//!
//! Text between rule matches is split into word lexemes (`[A-Za-z0-9_]+`)
//! and everything else; only words are looked up in keyword sets.

use std::ops::Range;

use logos::Logos;

/// Lexeme class of a gap fragment
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lexeme {
    #[regex(r"[A-Za-z0-9_]+")]
    Word,

    #[regex(r"[^A-Za-z0-9_]+")]
    Other,
}

/// Iterator over `(lexeme, absolute byte range)` for a slice of the input
pub(crate) struct Lexemes<'a> {
    inner: logos::Lexer<'a, Lexeme>,
    base: usize,
}

impl<'a> Lexemes<'a> {
    /// Lex `text[range]`, reporting ranges relative to `text`
    pub(crate) fn new(text: &'a str, range: Range<usize>) -> Self {
        Self {
            base: range.start,
            inner: Lexeme::lexer(&text[range]),
        }
    }
}

impl Iterator for Lexemes<'_> {
    type Item = (Lexeme, Range<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        let lexeme = self.inner.next()?.unwrap_or(Lexeme::Other);
        let span = self.inner.span();
        Some((lexeme, self.base + span.start..self.base + span.end))
    }
}
