//! Grammar for the eel scripting language.
//!
//! Line comments, double-quoted strings, numbers with an optional type
//! suffix, and `function`/`procedure` declarations with their name and
//! parameter list. Single-quoted strings and block comments are not
//! recognized.

use crate::grammar::{Grammar, HighlightKind, Keywords, Primitives, Rule, primitives::C_NUMBER_RE};

/// Registration name
pub const NAME: &str = "eel";

pub const KEYWORDS: &str = "function procedure if local return throw upvalue export";
pub const LITERALS: &str = "true false";

/// Single-character number type suffixes
pub const NUMBER_SUFFIXES: &str = "dflsi";

pub fn keywords() -> Keywords {
    Keywords::new()
        .keyword(KEYWORDS)
        .literal(LITERALS)
        .built_in("")
}

pub fn grammar(p: &Primitives) -> Grammar {
    Grammar::new(NAME)
        .keywords(keywords())
        // Keeps eel snippets embedded in markup from running into a closing tag
        .illegal("</")
        .rules([
            p.line_comment(),
            Rule::alternatives([p.quote_string()]).scope(HighlightKind::STRING),
            Rule::alternatives([
                Rule::delimited(format!("{C_NUMBER_RE}[{NUMBER_SUFFIXES}]")).relevance(1),
                p.c_number(),
            ])
            .scope(HighlightKind::NUMBER),
            declaration(p, "function"),
            declaration(p, "procedure"),
        ])
}

/// `function name(params)` up to the opening brace of its body
fn declaration(p: &Primitives, keyword: &str) -> Rule {
    Rule::begin_keywords(keyword)
        .end(r"\s*\{")
        .exclude_end()
        .scope(HighlightKind::FUNCTION)
        .contains([
            p.title(),
            Rule::delimited(r"\(")
                .end(r"\)")
                .scope(HighlightKind::PARAMS)
                .keywords(keywords())
                .illegal(r#"["']"#),
        ])
}
