//! Helpers for highlighting eel sources and inspecting the result.

use eelhl::{Highlight, HighlightKind, Registry, TextSize};
use once_cell::sync::Lazy;

/// Registry with the shipped grammars, built once for all tests.
pub static REGISTRY: Lazy<Registry> =
    Lazy::new(|| Registry::with_builtin().expect("builtin grammars compile"));

/// Highlight a source with the eel grammar.
pub fn eel(source: &str) -> Highlight {
    REGISTRY
        .highlight("eel", source)
        .unwrap_or_else(|e| panic!("failed to highlight {source:?}: {e}"))
}

/// Source text of every span of `kind`, in order.
pub fn texts_of<'a>(highlight: &Highlight, source: &'a str, kind: HighlightKind) -> Vec<&'a str> {
    highlight
        .spans_of(kind)
        .into_iter()
        .map(|span| &source[span.range])
        .collect()
}

/// Innermost classification of the first occurrence of `needle`.
pub fn kind_of(highlight: &Highlight, source: &str, needle: &str) -> Option<HighlightKind> {
    let offset = source
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in {source:?}"));
    highlight.kind_at(TextSize::new(offset as u32))
}

/// Assert the highlight tree reproduces its input exactly.
pub fn assert_lossless(highlight: &Highlight, source: &str) {
    assert_eq!(highlight.text(), source, "highlight tree lost or duplicated text");
}
