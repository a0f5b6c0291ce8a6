//! Highlight categories
//!
//! Each kind is both the category label a rule applies to its span and a
//! rowan syntax kind in the highlight tree.

/// All highlight kinds (span categories and tree structure)
///
/// Node kinds wrap a matched rule's span; `KEYWORD`, `LITERAL`, `BUILT_IN`
/// and `TEXT` are leaf tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum HighlightKind {
    // =========================================================================
    // LEAVES
    // =========================================================================
    TEXT = 0,
    KEYWORD,
    LITERAL,
    BUILT_IN,

    // =========================================================================
    // SPANS
    // =========================================================================
    COMMENT,
    DOCTAG,
    STRING,
    NUMBER,
    FUNCTION,
    TITLE,
    PARAMS,

    ROOT,

    #[doc(hidden)]
    __LAST,
}

impl HighlightKind {
    /// Class name used by highlighting themes (`built_in`, `params`, ...)
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TEXT => "text",
            Self::KEYWORD => "keyword",
            Self::LITERAL => "literal",
            Self::BUILT_IN => "built_in",
            Self::COMMENT => "comment",
            Self::DOCTAG => "doctag",
            Self::STRING => "string",
            Self::NUMBER => "number",
            Self::FUNCTION => "function",
            Self::TITLE => "title",
            Self::PARAMS => "params",
            Self::ROOT => "root",
            Self::__LAST => "",
        }
    }

    /// Leaf produced by keyword classification
    pub fn is_keyword_class(self) -> bool {
        matches!(self, Self::KEYWORD | Self::LITERAL | Self::BUILT_IN)
    }

    /// Anything a theme would color
    pub fn is_classified(self) -> bool {
        !matches!(self, Self::TEXT | Self::ROOT | Self::__LAST)
    }
}

impl std::fmt::Display for HighlightKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HighlightKind> for rowan::SyntaxKind {
    fn from(kind: HighlightKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for HighlightKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < HighlightKind::__LAST as u16);
        // Safety: we control all highlight kinds and check bounds above
        unsafe { std::mem::transmute::<u16, HighlightKind>(raw.0) }
    }
}
