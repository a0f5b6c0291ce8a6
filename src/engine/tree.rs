//! Highlight results
//!
//! A highlight is a lossless rowan tree: concatenating its tokens gives back
//! the input. Rule spans are nodes, keyword hits and plain text are tokens.

use rowan::{GreenNode, GreenNodeBuilder, NodeOrToken, TextRange, TextSize, WalkEvent};
use smol_str::SmolStr;

use crate::errors::{Diagnostic, Severity};
use crate::grammar::HighlightKind;

/// Tree event produced by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event {
    Start(HighlightKind),
    Token(HighlightKind, TextRange),
    Finish,
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HighlightLanguage {}

impl rowan::Language for HighlightLanguage {
    type Kind = HighlightKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type HighlightNode = rowan::SyntaxNode<HighlightLanguage>;
pub type HighlightToken = rowan::SyntaxToken<HighlightLanguage>;
pub type HighlightElement = rowan::SyntaxElement<HighlightLanguage>;

pub(crate) fn build_tree(text: &str, events: &[Event]) -> GreenNode {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(HighlightKind::ROOT.into());
    for event in events {
        match *event {
            Event::Start(kind) => builder.start_node(kind.into()),
            Event::Token(kind, range) => builder.token(kind.into(), &text[range]),
            Event::Finish => builder.finish_node(),
        }
    }
    builder.finish_node();
    builder.finish()
}

/// A classified region of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub kind: HighlightKind,
    pub range: TextRange,
    /// Number of classified spans enclosing this one
    pub depth: usize,
}

/// Result of highlighting one input with one grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub(crate) language: SmolStr,
    pub(crate) green: GreenNode,
    pub(crate) relevance: u32,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl Highlight {
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Get the root node
    pub fn syntax(&self) -> HighlightNode {
        HighlightNode::new_root(self.green.clone())
    }

    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    /// Confidence that the input is in this language
    pub fn relevance(&self) -> u32 {
        self.relevance
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Check for error-severity diagnostics
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Reconstructed input text
    pub fn text(&self) -> String {
        self.syntax().text().to_string()
    }

    /// All classified spans in source order, outer spans before inner ones
    pub fn spans(&self) -> Vec<HighlightSpan> {
        let mut spans = Vec::new();
        let mut depth = 0;
        for event in self.syntax().preorder_with_tokens() {
            match event {
                WalkEvent::Enter(element) => {
                    let kind = element.kind();
                    if kind.is_classified() {
                        spans.push(HighlightSpan {
                            kind,
                            range: element.text_range(),
                            depth,
                        });
                        if element.as_node().is_some() {
                            depth += 1;
                        }
                    }
                }
                WalkEvent::Leave(NodeOrToken::Node(node)) if node.kind().is_classified() => {
                    depth -= 1;
                }
                WalkEvent::Leave(_) => {}
            }
        }
        spans
    }

    /// Spans of a single kind
    pub fn spans_of(&self, kind: HighlightKind) -> Vec<HighlightSpan> {
        self.spans()
            .into_iter()
            .filter(|span| span.kind == kind)
            .collect()
    }

    /// Innermost classification of the character starting at `offset`
    pub fn kind_at(&self, offset: TextSize) -> Option<HighlightKind> {
        let token = self.syntax().token_at_offset(offset).right_biased()?;
        if token.kind().is_keyword_class() {
            return Some(token.kind());
        }
        token
            .parent_ancestors()
            .map(|node| node.kind())
            .find(|kind| kind.is_classified())
    }

    /// Leaf tokens paired with their effective classification
    pub fn classified_tokens(&self) -> Vec<(HighlightToken, Option<HighlightKind>)> {
        self.syntax()
            .descendants_with_tokens()
            .filter_map(|element| element.into_token())
            .map(|token| {
                let kind = if token.kind().is_keyword_class() {
                    Some(token.kind())
                } else {
                    token
                        .parent_ancestors()
                        .map(|node| node.kind())
                        .find(|kind| kind.is_classified())
                };
                (token, kind)
            })
            .collect()
    }
}
