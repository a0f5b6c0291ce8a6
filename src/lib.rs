//! # eelhl
//!
//! Lexical highlighting for the eel scripting language: a declarative grammar
//! and the engine that interprets it.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! docs      → Fenced code blocks in pages, highlight-on-load
//!   ↓
//! ide       → Semantic tokens (line/col) for editors
//!   ↓
//! registry  → Explicit name → compiled grammar map
//!   ↓
//! engine    → Regex compilation, logos word splitting, scanner, rowan tree
//!   ↓
//! languages → The eel grammar
//!   ↓
//! grammar   → Descriptor data model: Grammar, Rule, Keywords, Primitives
//!   ↓
//! base      → Primitives (TextRange, LineIndex, Position)
//! ```

// ============================================================================
// MODULES (dependency order: base → grammar → languages → engine → registry → ide → docs)
// ============================================================================

/// Foundation types: TextRange, LineIndex, Position/Span
pub mod base;

/// Diagnostics and API errors
pub mod errors;

/// Highlighting options
pub mod config;

/// Grammar descriptors: Grammar, Rule, Keywords, shared primitives
pub mod grammar;

/// Shipped grammars
pub mod languages;

/// Engine: compilation, scanning, highlight trees
pub mod engine;

/// Language registry
pub mod registry;

/// IDE features: semantic tokens
pub mod ide;

/// Documentation pages: code-block extraction and loading
pub mod docs;

// Re-export commonly needed items
pub use config::HighlightOptions;
pub use engine::{CompiledGrammar, Highlight, HighlightNode, HighlightSpan, compile, highlight};
pub use errors::{Diagnostic, ErrorCode, HighlightError, Severity};
pub use grammar::{Grammar, HighlightKind, KeywordCategory, Keywords, Primitives, Rule};
pub use registry::{Registry, RegistryBuilder};

// Re-export foundation types
pub use base::{LineIndex, Position, Span, TextRange, TextSize};
