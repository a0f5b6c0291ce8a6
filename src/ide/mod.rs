//! IDE features: editor-facing views of a highlight.
//!
//! Pure functions: take a [`crate::Highlight`] in, return plain data out. No
//! LSP types; conversion happens at the LSP boundary.

mod semantic_tokens;

pub use semantic_tokens::{SemanticToken, TokenType, encode_deltas, semantic_tokens};
