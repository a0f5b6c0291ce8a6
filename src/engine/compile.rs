//! Grammar compilation
//!
//! Turns a declarative [`Grammar`] into regexes and keyword maps once, so
//! every highlight reuses them. Alternatives are flattened into sibling rules
//! in variant order, which keeps first-match-wins a plain ordered scan.

use std::cell::Cell;
use std::ops::Deref;
use std::sync::Arc;

use regex::{Regex, RegexBuilder};
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::errors::{HighlightError, Result};
use crate::grammar::{Grammar, HighlightKind, KeywordCategory, Keywords, Rule, RuleBody, is_identifier};

/// Word → category lookup for one scope
#[derive(Debug, Default)]
pub(crate) struct KeywordMap {
    words: FxHashMap<SmolStr, KeywordCategory>,
    case_insensitive: bool,
}

impl KeywordMap {
    fn from_keywords(keywords: &Keywords, case_insensitive: bool) -> Self {
        let mut words = FxHashMap::default();
        for (word, category) in keywords.iter() {
            words
                .entry(normalize(word, case_insensitive))
                .or_insert(category);
        }
        Self {
            words,
            case_insensitive,
        }
    }

    fn from_words(list: &[SmolStr], case_insensitive: bool) -> Self {
        let words = list
            .iter()
            .map(|word| (normalize(word, case_insensitive), KeywordCategory::Keyword))
            .collect();
        Self {
            words,
            case_insensitive,
        }
    }

    pub(crate) fn classify(&self, word: &str) -> Option<KeywordCategory> {
        if !is_identifier(word) {
            return None;
        }
        if self.case_insensitive {
            self.words.get(word.to_lowercase().as_str()).copied()
        } else {
            self.words.get(word).copied()
        }
    }
}

fn normalize(word: &str, case_insensitive: bool) -> SmolStr {
    if case_insensitive {
        SmolStr::new(word.to_lowercase())
    } else {
        SmolStr::new(word)
    }
}

/// A compiled pattern and its slot in a scan's match cache
#[derive(Debug)]
pub(crate) struct Pattern {
    regex: Regex,
    slot: usize,
}

impl Pattern {
    /// Unique within one compiled grammar
    pub(crate) fn slot(&self) -> usize {
        self.slot
    }
}

impl Deref for Pattern {
    type Target = Regex;

    fn deref(&self) -> &Regex {
        &self.regex
    }
}

/// A rule ready for scanning
#[derive(Debug)]
pub(crate) struct CompiledRule {
    /// Name used in diagnostics
    pub(crate) label: SmolStr,
    pub(crate) scope: Option<HighlightKind>,
    /// `None` only for the grammar root
    pub(crate) begin: Option<Pattern>,
    /// `None` ends the rule right after its begin (the root never ends)
    pub(crate) end: Option<Pattern>,
    pub(crate) exclude_end: bool,
    pub(crate) keywords: Option<Arc<KeywordMap>>,
    pub(crate) illegal: Option<Pattern>,
    pub(crate) relevance: u32,
    pub(crate) children: Vec<CompiledRule>,
}

impl CompiledRule {
    fn count(&self) -> usize {
        1 + self.children.iter().map(CompiledRule::count).sum::<usize>()
    }
}

/// An immutable, compiled grammar shared across highlights
#[derive(Debug)]
pub struct CompiledGrammar {
    name: SmolStr,
    aliases: Vec<SmolStr>,
    root: CompiledRule,
    patterns: usize,
}

impl CompiledGrammar {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[SmolStr] {
        &self.aliases
    }

    /// Number of compiled rules below the root, nested ones included
    pub fn rule_count(&self) -> usize {
        self.root.count() - 1
    }

    pub(crate) fn root(&self) -> &CompiledRule {
        &self.root
    }

    /// Number of patterns, and so of match cache slots a scan needs
    pub(crate) fn pattern_count(&self) -> usize {
        self.patterns
    }
}

/// Compile a grammar, failing on the first invalid pattern.
pub fn compile(grammar: &Grammar) -> Result<CompiledGrammar> {
    let compiler = Compiler {
        grammar,
        next_slot: Cell::new(0),
    };

    let root = CompiledRule {
        label: grammar.name.clone(),
        scope: None,
        begin: None,
        end: None,
        exclude_end: false,
        keywords: compiler.keyword_map(Some(&grammar.keywords)),
        illegal: compiler.optional_pattern(grammar.illegal.as_deref())?,
        relevance: 0,
        children: compiler.rules(&grammar.rules, None)?,
    };

    let compiled = CompiledGrammar {
        name: grammar.name.clone(),
        aliases: grammar.aliases.clone(),
        root,
        patterns: compiler.next_slot.get(),
    };
    tracing::debug!(
        language = %compiled.name,
        rules = compiled.rule_count(),
        "compiled grammar"
    );
    Ok(compiled)
}

struct Compiler<'g> {
    grammar: &'g Grammar,
    next_slot: Cell<usize>,
}

impl Compiler<'_> {
    fn pattern(&self, source: &str) -> Result<Pattern> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(self.grammar.case_insensitive)
            .build()
            .map_err(|err| HighlightError::invalid_pattern(self.grammar.name.clone(), source, err))?;
        let slot = self.next_slot.get();
        self.next_slot.set(slot + 1);
        Ok(Pattern { regex, slot })
    }

    fn optional_pattern(&self, source: Option<&str>) -> Result<Option<Pattern>> {
        source.map(|source| self.pattern(source)).transpose()
    }

    fn keyword_map(&self, keywords: Option<&Keywords>) -> Option<Arc<KeywordMap>> {
        keywords
            .filter(|keywords| !keywords.is_empty())
            .map(|keywords| Arc::new(KeywordMap::from_keywords(keywords, self.grammar.case_insensitive)))
    }

    fn rules(&self, rules: &[Rule], inherited: Option<HighlightKind>) -> Result<Vec<CompiledRule>> {
        let mut out = Vec::with_capacity(rules.len());
        self.flatten_into(rules, inherited, &mut out)?;
        Ok(out)
    }

    fn flatten_into(
        &self,
        rules: &[Rule],
        inherited: Option<HighlightKind>,
        out: &mut Vec<CompiledRule>,
    ) -> Result<()> {
        for rule in rules {
            match rule {
                Rule::Delimited { begin, body } => {
                    let begin = self.pattern(begin)?;
                    let keywords = self.keyword_map(body.keywords.as_ref());
                    out.push(self.rule(begin, body, keywords, inherited)?);
                }
                Rule::KeywordScoped { words, body } => {
                    if words.is_empty() {
                        return Err(HighlightError::MissingBegin {
                            language: self.grammar.name.clone(),
                        });
                    }
                    let alternation = words
                        .iter()
                        .map(|word| regex::escape(word))
                        .collect::<Vec<_>>()
                        .join("|");
                    let begin = self.pattern(&format!(r"\b(?:{alternation})\b"))?;
                    // The triggering word is a keyword inside its own span
                    let keywords = self.keyword_map(body.keywords.as_ref()).or_else(|| {
                        Some(Arc::new(KeywordMap::from_words(
                            words,
                            self.grammar.case_insensitive,
                        )))
                    });
                    out.push(self.rule(begin, body, keywords, inherited)?);
                }
                Rule::Alternatives { scope, variants } => {
                    self.flatten_into(variants, scope.or(inherited), out)?;
                }
            }
        }
        Ok(())
    }

    fn rule(
        &self,
        begin: Pattern,
        body: &RuleBody,
        keywords: Option<Arc<KeywordMap>>,
        inherited: Option<HighlightKind>,
    ) -> Result<CompiledRule> {
        let scope = body.scope.or(inherited);
        Ok(CompiledRule {
            label: scope
                .map(|kind| SmolStr::new_static(kind.as_str()))
                .unwrap_or_else(|| SmolStr::new_static("rule")),
            scope,
            begin: Some(begin),
            end: self.optional_pattern(body.end.as_deref())?,
            exclude_end: body.exclude_end,
            keywords,
            illegal: self.optional_pattern(body.illegal.as_deref())?,
            relevance: body.relevance,
            children: self.rules(&body.rules, None)?,
        })
    }
}
