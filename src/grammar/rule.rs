//! Rules
//!
//! Rules are a tagged variant: how a rule starts decides the variant, and the
//! shared [`RuleBody`] describes everything after the start.

use smol_str::SmolStr;

use super::keywords::Keywords;
use super::kind::HighlightKind;

/// Everything a rule declares after its start condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBody {
    /// Category applied to the matched span; `None` consumes without a span
    pub scope: Option<HighlightKind>,
    /// End pattern; `None` ends the rule right after its begin match
    pub end: Option<String>,
    /// Leave the end match out of the span (it is still consumed)
    pub exclude_end: bool,
    /// Keyword sets active inside the span
    pub keywords: Option<Keywords>,
    /// Pattern that abandons this rule when matched inside it
    pub illegal: Option<String>,
    /// Weight added to a result's relevance when the rule matches
    pub relevance: u32,
    /// Nested rules, only matched inside this rule's span
    pub rules: Vec<Rule>,
}

impl Default for RuleBody {
    fn default() -> Self {
        Self {
            scope: None,
            end: None,
            exclude_end: false,
            keywords: None,
            illegal: None,
            relevance: 1,
            rules: Vec::new(),
        }
    }
}

/// One matcher within a grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Starts on a begin pattern
    Delimited { begin: String, body: RuleBody },
    /// Starts on a whole-word keyword from `words`
    KeywordScoped { words: Vec<SmolStr>, body: RuleBody },
    /// First matching variant wins; variants without a scope inherit `scope`
    Alternatives {
        scope: Option<HighlightKind>,
        variants: Vec<Rule>,
    },
}

impl Rule {
    pub fn delimited(begin: impl Into<String>) -> Self {
        Self::Delimited {
            begin: begin.into(),
            body: RuleBody::default(),
        }
    }

    /// Rule triggered by any of the whitespace-separated `words`
    pub fn begin_keywords(words: &str) -> Self {
        Self::KeywordScoped {
            words: words.split_whitespace().map(SmolStr::new).collect(),
            body: RuleBody::default(),
        }
    }

    pub fn alternatives(variants: impl IntoIterator<Item = Rule>) -> Self {
        Self::Alternatives {
            scope: None,
            variants: variants.into_iter().collect(),
        }
    }

    pub fn scope(mut self, kind: HighlightKind) -> Self {
        match &mut self {
            Self::Delimited { body, .. } | Self::KeywordScoped { body, .. } => {
                body.scope = Some(kind)
            }
            Self::Alternatives { scope, .. } => *scope = Some(kind),
        }
        self
    }

    pub fn end(self, pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        self.map_body(|body| body.end = Some(pattern.clone()))
    }

    pub fn exclude_end(self) -> Self {
        self.map_body(|body| body.exclude_end = true)
    }

    pub fn keywords(self, keywords: Keywords) -> Self {
        self.map_body(|body| body.keywords = Some(keywords.clone()))
    }

    pub fn illegal(self, pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        self.map_body(|body| body.illegal = Some(pattern.clone()))
    }

    pub fn relevance(self, relevance: u32) -> Self {
        self.map_body(|body| body.relevance = relevance)
    }

    pub fn contains(self, rules: impl IntoIterator<Item = Rule>) -> Self {
        let rules: Vec<Rule> = rules.into_iter().collect();
        self.map_body(|body| body.rules.extend(rules.iter().cloned()))
    }

    /// Body of a non-alternative rule
    pub fn body(&self) -> Option<&RuleBody> {
        match self {
            Self::Delimited { body, .. } | Self::KeywordScoped { body, .. } => Some(body),
            Self::Alternatives { .. } => None,
        }
    }

    /// Category this rule gives its span
    pub fn scope_kind(&self) -> Option<HighlightKind> {
        match self {
            Self::Delimited { body, .. } | Self::KeywordScoped { body, .. } => body.scope,
            Self::Alternatives { scope, .. } => *scope,
        }
    }

    /// Apply a body change; on alternatives it applies to every variant.
    fn map_body(mut self, f: impl Fn(&mut RuleBody) + Copy) -> Self {
        match &mut self {
            Self::Delimited { body, .. } | Self::KeywordScoped { body, .. } => f(body),
            Self::Alternatives { variants, .. } => {
                for variant in variants.iter_mut() {
                    let placeholder = Rule::Alternatives {
                        scope: None,
                        variants: Vec::new(),
                    };
                    *variant = std::mem::replace(variant, placeholder).map_body(f);
                }
            }
        }
        self
    }
}
