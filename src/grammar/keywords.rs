//! Keyword sets
//!
//! Words are grouped by category; membership is checked on whole
//! identifier-shaped words only.

use indexmap::{IndexMap, IndexSet};
use smol_str::SmolStr;

use super::kind::HighlightKind;

/// Category a keyword set assigns to its members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Keyword,
    Literal,
    BuiltIn,
}

impl KeywordCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Literal => "literal",
            Self::BuiltIn => "built_in",
        }
    }
}

impl From<KeywordCategory> for HighlightKind {
    fn from(category: KeywordCategory) -> Self {
        match category {
            KeywordCategory::Keyword => HighlightKind::KEYWORD,
            KeywordCategory::Literal => HighlightKind::LITERAL,
            KeywordCategory::BuiltIn => HighlightKind::BUILT_IN,
        }
    }
}

/// Ordered keyword sets keyed by category.
///
/// A category can be declared with no members; it then classifies nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keywords {
    sets: IndexMap<KeywordCategory, IndexSet<SmolStr>>,
}

impl Keywords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add whitespace-separated `words` to a category
    pub fn with(mut self, category: KeywordCategory, words: &str) -> Self {
        let set = self.sets.entry(category).or_default();
        set.extend(words.split_whitespace().map(SmolStr::new));
        self
    }

    pub fn keyword(self, words: &str) -> Self {
        self.with(KeywordCategory::Keyword, words)
    }

    pub fn literal(self, words: &str) -> Self {
        self.with(KeywordCategory::Literal, words)
    }

    pub fn built_in(self, words: &str) -> Self {
        self.with(KeywordCategory::BuiltIn, words)
    }

    /// Members of one category in declaration order
    pub fn words(&self, category: KeywordCategory) -> impl Iterator<Item = &str> {
        self.sets
            .get(&category)
            .into_iter()
            .flat_map(|set| set.iter().map(SmolStr::as_str))
    }

    /// Declared categories, including empty ones
    pub fn categories(&self) -> impl Iterator<Item = KeywordCategory> + '_ {
        self.sets.keys().copied()
    }

    /// Every `(word, category)` pair in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, KeywordCategory)> {
        self.sets
            .iter()
            .flat_map(|(category, set)| set.iter().map(move |word| (word.as_str(), *category)))
    }

    pub fn len(&self) -> usize {
        self.sets.values().map(IndexSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Classify an identifier-shaped word by exact-case membership.
    pub fn classify(&self, word: &str) -> Option<KeywordCategory> {
        if !is_identifier(word) {
            return None;
        }
        self.sets
            .iter()
            .find(|(_, set)| set.contains(word))
            .map(|(category, _)| *category)
    }
}

/// `true` for words that could be an identifier (`_` may start one)
pub(crate) fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first == '_' || unicode_ident::is_xid_start(first) => {
            chars.all(unicode_ident::is_xid_continue)
        }
        _ => false,
    }
}
