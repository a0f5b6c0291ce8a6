//! Semantic tokens: highlight spans as line/column tokens for editors.

use text_size::TextSize;

use crate::base::LineIndex;
use crate::engine::Highlight;
use crate::grammar::HighlightKind;

/// Token type for semantic highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Comment,
    String,
    Number,
    Function,
    Parameter,
    Keyword,
    Literal,
    BuiltIn,
}

impl TokenType {
    /// LSP token type names, indexed by [`TokenType::to_lsp_index`]
    pub const LEGEND: &'static [&'static str] = &[
        "comment",
        "string",
        "number",
        "function",
        "parameter",
        "keyword",
        "enumMember",
        "variable",
    ];

    /// Convert to LSP token type index.
    pub fn to_lsp_index(self) -> u32 {
        match self {
            TokenType::Comment => 0,
            TokenType::String => 1,
            TokenType::Number => 2,
            TokenType::Function => 3,
            TokenType::Parameter => 4,
            TokenType::Keyword => 5,
            TokenType::Literal => 6,
            TokenType::BuiltIn => 7,
        }
    }

    /// Token type for a highlight kind; declaration bodies and plain text
    /// have none
    pub fn from_kind(kind: HighlightKind) -> Option<Self> {
        match kind {
            HighlightKind::COMMENT | HighlightKind::DOCTAG => Some(TokenType::Comment),
            HighlightKind::STRING => Some(TokenType::String),
            HighlightKind::NUMBER => Some(TokenType::Number),
            HighlightKind::TITLE => Some(TokenType::Function),
            HighlightKind::PARAMS => Some(TokenType::Parameter),
            HighlightKind::KEYWORD => Some(TokenType::Keyword),
            HighlightKind::LITERAL => Some(TokenType::Literal),
            HighlightKind::BUILT_IN => Some(TokenType::BuiltIn),
            HighlightKind::FUNCTION
            | HighlightKind::TEXT
            | HighlightKind::ROOT
            | HighlightKind::__LAST => None,
        }
    }
}

/// A semantic token for syntax highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticToken {
    /// Line number (0-indexed)
    pub line: u32,
    /// Column number (0-indexed, UTF-16 units)
    pub col: u32,
    /// Length of the token in UTF-16 units
    pub length: u32,
    /// The token type
    pub token_type: TokenType,
}

/// Get semantic tokens for a highlighted text.
///
/// `text` must be the text that was highlighted. Spans crossing lines are split
/// into one token per line, and touching tokens of the same type on a line
/// are merged.
///
/// # Returns
///
/// Vector of semantic tokens sorted by position.
pub fn semantic_tokens(highlight: &Highlight, text: &str) -> Vec<SemanticToken> {
    let index = LineIndex::new(text);
    let mut tokens: Vec<SemanticToken> = Vec::new();

    for (token, kind) in highlight.classified_tokens() {
        let Some(token_type) = kind.and_then(TokenType::from_kind) else {
            continue;
        };

        let mut offset = usize::from(token.text_range().start());
        for segment in token.text().split_inclusive('\n') {
            let content = segment.trim_end_matches(['\n', '\r']);
            if !content.is_empty() {
                let start = index.position(text, TextSize::new(offset as u32));
                let length = content.encode_utf16().count() as u32;
                match tokens.last_mut() {
                    Some(last)
                        if last.token_type == token_type
                            && last.line == start.line
                            && last.col + last.length == start.column =>
                    {
                        last.length += length;
                    }
                    _ => tokens.push(SemanticToken {
                        line: start.line,
                        col: start.column,
                        length,
                        token_type,
                    }),
                }
            }
            offset += segment.len();
        }
    }

    tokens.sort_by_key(|t| (t.line, t.col));
    tokens
}

/// Encode tokens in the LSP relative format
/// (`deltaLine, deltaStart, length, tokenType, tokenModifiers`).
pub fn encode_deltas(tokens: &[SemanticToken]) -> Vec<u32> {
    let mut data = Vec::with_capacity(tokens.len() * 5);
    let (mut prev_line, mut prev_col) = (0, 0);
    for token in tokens {
        let delta_line = token.line - prev_line;
        let delta_start = if delta_line == 0 {
            token.col - prev_col
        } else {
            token.col
        };
        data.extend([
            delta_line,
            delta_start,
            token.length,
            token.token_type.to_lsp_index(),
            0,
        ]);
        prev_line = token.line;
        prev_col = token.col;
    }
    data
}
