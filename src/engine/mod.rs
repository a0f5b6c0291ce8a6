//! Highlighting engine
//!
//! ```text
//! Grammar (descriptor)
//!     ↓ compile (regex, keyword maps)
//! CompiledGrammar
//!     ↓ Scanner (leftmost-first, logos word splitting)
//! Events
//!     ↓ rowan GreenNodeBuilder
//! Highlight (lossless tree + relevance + diagnostics)
//! ```

mod compile;
mod lexer;
mod scanner;
mod tree;

pub use compile::{CompiledGrammar, compile};
pub use tree::{
    Highlight, HighlightElement, HighlightLanguage, HighlightNode, HighlightSpan, HighlightToken,
};

use crate::config::HighlightOptions;
use crate::errors::Result;

/// Highlight `text` with a compiled grammar.
pub fn highlight(
    grammar: &CompiledGrammar,
    text: &str,
    options: &HighlightOptions,
) -> Result<Highlight> {
    let output = scanner::Scanner::scan(grammar, text, options)?;
    Ok(Highlight {
        language: grammar.name().into(),
        green: tree::build_tree(text, &output.events),
        relevance: output.relevance,
        diagnostics: output.diagnostics,
    })
}
