//! Grammar descriptors
//!
//! A [`Grammar`] is pure data: keyword sets, an optional illegal pattern and an
//! ordered list of [`Rule`]s. It has no behavior of its own; the engine compiles
//! it once and interprets it for every input.
//!
//! ```text
//! Grammar
//!   ├── keywords: Keywords (keyword / literal / built_in)
//!   ├── illegal: Option<pattern>
//!   └── rules: Vec<Rule>
//!         ├── Rule::Delimited      begin pattern .. end pattern
//!         ├── Rule::KeywordScoped  begin keyword .. end pattern
//!         └── Rule::Alternatives   first matching variant wins
//! ```

mod keywords;
mod kind;
pub mod primitives;
mod rule;

pub use keywords::{KeywordCategory, Keywords};
pub(crate) use keywords::is_identifier;
pub use kind::HighlightKind;
pub use primitives::Primitives;
pub use rule::{Rule, RuleBody};

use smol_str::SmolStr;

/// Function that builds a grammar from the shared primitives.
pub type GrammarFn = fn(&Primitives) -> Grammar;

/// Declarative description of how to classify one language's source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    /// Display name
    pub name: SmolStr,
    /// Extra names the grammar can be looked up by
    pub aliases: Vec<SmolStr>,
    /// Compare keywords and patterns ignoring case
    pub case_insensitive: bool,
    pub keywords: Keywords,
    /// Pattern that aborts recognition at the top level
    pub illegal: Option<String>,
    /// Top-level rules in match priority order
    pub rules: Vec<Rule>,
}

impl Grammar {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            case_insensitive: false,
            keywords: Keywords::default(),
            illegal: None,
            rules: Vec::new(),
        }
    }

    pub fn alias(mut self, alias: impl Into<SmolStr>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn keywords(mut self, keywords: Keywords) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn illegal(mut self, pattern: impl Into<String>) -> Self {
        self.illegal = Some(pattern.into());
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }
}
