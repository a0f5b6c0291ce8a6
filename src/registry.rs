//! Language registry
//!
//! An explicit name → grammar map owned by the application. Grammars are
//! registered on a [`RegistryBuilder`], compiled once by
//! [`RegistryBuilder::build`], and never change afterwards.
//!
//! # Usage
//!
//! ```
//! use eelhl::{HighlightKind, Registry};
//!
//! let registry = Registry::with_builtin().unwrap();
//! let highlight = registry.highlight("eel", "local x = true").unwrap();
//! assert_eq!(highlight.spans_of(HighlightKind::LITERAL).len(), 1);
//! ```

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::config::HighlightOptions;
use crate::engine::{self, CompiledGrammar, Highlight};
use crate::errors::{HighlightError, Result, Severity};
use crate::grammar::{GrammarFn, Primitives};
use crate::languages;

/// Collects grammar-construction functions before compilation.
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    entries: IndexMap<SmolStr, GrammarFn>,
    options: HighlightOptions,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a grammar under `name` (case-insensitive).
    ///
    /// Registering the same name again replaces the earlier function and keeps
    /// its original position.
    pub fn register(mut self, name: &str, grammar: GrammarFn) -> Self {
        let key = normalize(name);
        if self.entries.insert(key.clone(), grammar).is_some() {
            tracing::debug!(language = %key, "replacing registered grammar");
        }
        self
    }

    /// Register every shipped grammar
    pub fn builtin(self) -> Self {
        languages::BUILTIN
            .iter()
            .fold(self, |builder, (name, grammar)| builder.register(name, *grammar))
    }

    pub fn options(mut self, options: HighlightOptions) -> Self {
        self.options = options;
        self
    }

    /// Build and compile every registered grammar.
    pub fn build(self) -> Result<Registry> {
        let primitives = Primitives::new();
        let mut languages = IndexMap::with_capacity(self.entries.len());
        let mut aliases = FxHashMap::default();

        for (name, grammar_fn) in self.entries {
            let grammar = grammar_fn(&primitives);
            let compiled = engine::compile(&grammar)?;
            for alias in compiled.aliases() {
                aliases.insert(normalize(alias), name.clone());
            }
            languages.insert(name, Arc::new(compiled));
        }

        tracing::debug!(languages = languages.len(), "built registry");
        Ok(Registry {
            languages,
            aliases,
            options: self.options,
        })
    }
}

/// Immutable set of compiled grammars.
#[derive(Debug, Clone)]
pub struct Registry {
    languages: IndexMap<SmolStr, Arc<CompiledGrammar>>,
    aliases: FxHashMap<SmolStr, SmolStr>,
    options: HighlightOptions,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Registry holding every shipped grammar with default options
    pub fn with_builtin() -> Result<Self> {
        RegistryBuilder::new().builtin().build()
    }

    pub fn options(&self) -> &HighlightOptions {
        &self.options
    }

    /// Look up a grammar by name or alias (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&Arc<CompiledGrammar>> {
        let key = normalize(name);
        self.languages.get(&key).or_else(|| {
            self.aliases
                .get(&key)
                .and_then(|target| self.languages.get(target))
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Registered names in registration order
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(SmolStr::as_str)
    }

    /// Highlight `text` with the grammar registered under `name`.
    pub fn highlight(&self, name: &str, text: &str) -> Result<Highlight> {
        let grammar = self
            .get(name)
            .ok_or_else(|| HighlightError::UnknownLanguage(SmolStr::new(name)))?;
        engine::highlight(grammar, text, &self.options)
    }

    /// Highlight with every candidate and keep the most relevant result.
    ///
    /// Candidates default to all registered languages. Results with
    /// error-severity diagnostics, or scoring below
    /// [`HighlightOptions::min_relevance_for_auto`], are discarded; ties go
    /// to the earlier candidate.
    pub fn highlight_auto(&self, text: &str, subset: Option<&[&str]>) -> Option<Highlight> {
        let candidates: Vec<&Arc<CompiledGrammar>> = match subset {
            Some(names) => names.iter().filter_map(|name| self.get(name)).collect(),
            None => self.languages.values().collect(),
        };

        let mut best: Option<Highlight> = None;
        for grammar in candidates {
            let highlight = match engine::highlight(grammar, text, &self.options) {
                Ok(highlight) => highlight,
                Err(err) => {
                    tracing::trace!(language = grammar.name(), %err, "auto-detect candidate failed");
                    continue;
                }
            };
            let rejected = highlight
                .diagnostics()
                .iter()
                .any(|d| d.severity == Severity::Error);
            if rejected || highlight.relevance() < self.options.min_relevance_for_auto {
                continue;
            }
            if best
                .as_ref()
                .is_none_or(|current| highlight.relevance() > current.relevance())
            {
                best = Some(highlight);
            }
        }
        best
    }
}

fn normalize(name: &str) -> SmolStr {
    SmolStr::new(name.trim().to_ascii_lowercase())
}
