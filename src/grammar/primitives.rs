//! Shared rule fragments handed to every grammar-construction function.
//!
//! These are the building blocks C-like grammars reuse: line comments,
//! double-quoted strings, C numbers and declaration titles.

use super::kind::HighlightKind;
use super::rule::Rule;

/// Identifier starting with a letter or underscore
pub const UNDERSCORE_IDENT_RE: &str = r"[a-zA-Z_]\w*";

/// C-style number: optional sign, hex, or decimal with fraction and exponent
pub const C_NUMBER_RE: &str = r"(-?)(\b0[xX][a-fA-F0-9]+|(\b\d+(\.\d*)?|\.\d+)([eE][-+]?\d+)?)";

/// Marker words highlighted inside comments
pub const DOCTAG_RE: &str = r"\b(?:TODO|FIXME|NOTE|BUG|XXX):";

/// Factory for the shared rule fragments.
///
/// Every call returns an equal value, so grammars built from the same
/// primitives are identical.
#[derive(Debug, Clone, Copy, Default)]
pub struct Primitives;

impl Primitives {
    pub fn new() -> Self {
        Self
    }

    /// `\` followed by any character, consumed without a span
    pub fn backslash_escape(&self) -> Rule {
        Rule::delimited(r"\\[\s\S]").relevance(0)
    }

    /// Comment between `begin` and `end` with doctag markers inside
    pub fn comment(&self, begin: &str, end: &str) -> Rule {
        Rule::delimited(begin)
            .end(end)
            .scope(HighlightKind::COMMENT)
            .contains([Rule::delimited(DOCTAG_RE)
                .scope(HighlightKind::DOCTAG)
                .relevance(0)])
    }

    /// `//` to end of line; the newline is not part of the comment
    pub fn line_comment(&self) -> Rule {
        self.comment("//", "(?m)$")
    }

    /// Double-quoted string with backslash escapes; a raw newline is illegal
    pub fn quote_string(&self) -> Rule {
        Rule::delimited("\"")
            .end("\"")
            .scope(HighlightKind::STRING)
            .illegal(r"\n")
            .contains([self.backslash_escape()])
    }

    pub fn c_number(&self) -> Rule {
        Rule::delimited(C_NUMBER_RE)
            .scope(HighlightKind::NUMBER)
            .relevance(0)
    }

    /// Declared name of a function or type
    pub fn title(&self) -> Rule {
        Rule::delimited(UNDERSCORE_IDENT_RE)
            .scope(HighlightKind::TITLE)
            .relevance(0)
    }
}
