#![allow(clippy::unwrap_used)]

use eelhl::HighlightKind;
use rstest::rstest;

use crate::helpers::highlight_helpers::{assert_lossless, eel, kind_of, texts_of};
use crate::helpers::source_fixtures::{EXPORTED_MODULE, FUNCTION_DECL, PROCEDURE_WITH_BODY};

#[test]
fn test_function_declaration_spans() {
    let highlight = eel(FUNCTION_DECL);

    assert_eq!(
        texts_of(&highlight, FUNCTION_DECL, HighlightKind::FUNCTION),
        vec!["function foo(bar)"]
    );
    assert_eq!(
        texts_of(&highlight, FUNCTION_DECL, HighlightKind::KEYWORD),
        vec!["function"]
    );
    assert_eq!(
        texts_of(&highlight, FUNCTION_DECL, HighlightKind::TITLE),
        vec!["foo"]
    );
    assert_eq!(
        texts_of(&highlight, FUNCTION_DECL, HighlightKind::PARAMS),
        vec!["(bar)"]
    );
    assert_eq!(kind_of(&highlight, FUNCTION_DECL, "{"), None);
    assert!(highlight.diagnostics().is_empty());
    assert_lossless(&highlight, FUNCTION_DECL);
}

#[test]
fn test_title_and_params_nest_inside_function() {
    let highlight = eel(FUNCTION_DECL);
    let title = &highlight.spans_of(HighlightKind::TITLE)[0];
    let params = &highlight.spans_of(HighlightKind::PARAMS)[0];
    let function = &highlight.spans_of(HighlightKind::FUNCTION)[0];

    assert_eq!(function.depth, 0);
    assert_eq!(title.depth, 1);
    assert_eq!(params.depth, 1);
    assert!(function.range.contains_range(title.range));
    assert!(function.range.contains_range(params.range));
}

#[rstest]
#[case::function("function", "function run()")]
#[case::procedure("procedure", "procedure run()")]
fn test_both_declaration_keywords(#[case] keyword: &str, #[case] expected: &str) {
    let source = format!("{keyword} run() {{}}");
    let highlight = eel(&source);
    assert_eq!(
        texts_of(&highlight, &source, HighlightKind::FUNCTION),
        vec![expected]
    );
    assert_eq!(texts_of(&highlight, &source, HighlightKind::TITLE), vec!["run"]);
}

#[test]
fn test_params_classify_eel_keywords() {
    let source = "function f(local x, upvalue y) {";
    let highlight = eel(source);
    assert_eq!(
        texts_of(&highlight, source, HighlightKind::KEYWORD),
        vec!["function", "local", "upvalue"]
    );
    assert_eq!(kind_of(&highlight, source, "x"), Some(HighlightKind::PARAMS));
}

#[test]
fn test_opening_brace_on_next_line() {
    let highlight = eel(PROCEDURE_WITH_BODY);
    let source = PROCEDURE_WITH_BODY;

    assert_eq!(
        texts_of(&highlight, source, HighlightKind::FUNCTION),
        vec!["procedure greet(name, upvalue count)"]
    );
    assert_eq!(texts_of(&highlight, source, HighlightKind::TITLE), vec!["greet"]);
    assert_eq!(
        texts_of(&highlight, source, HighlightKind::PARAMS),
        vec!["(name, upvalue count)"]
    );
}

#[test]
fn test_procedure_body_highlights_at_top_level() {
    let source = PROCEDURE_WITH_BODY;
    let highlight = eel(source);

    assert_eq!(
        texts_of(&highlight, source, HighlightKind::KEYWORD),
        vec!["procedure", "upvalue", "if", "return", "throw"]
    );
    assert_eq!(texts_of(&highlight, source, HighlightKind::LITERAL), vec!["true"]);
    assert_eq!(
        texts_of(&highlight, source, HighlightKind::COMMENT),
        vec!["// say hello"]
    );
    assert_eq!(
        texts_of(&highlight, source, HighlightKind::STRING),
        vec![r#""hello ""#, r#""\n""#, r#""too many""#]
    );
    assert_eq!(texts_of(&highlight, source, HighlightKind::NUMBER), vec!["2"]);
    assert!(highlight.diagnostics().is_empty());
    assert_lossless(&highlight, source);
}

#[test]
fn test_exported_module() {
    let source = EXPORTED_MODULE;
    let highlight = eel(source);

    assert_eq!(
        texts_of(&highlight, source, HighlightKind::FUNCTION),
        vec!["function add(a, b)"]
    );
    assert_eq!(
        texts_of(&highlight, source, HighlightKind::KEYWORD),
        vec!["export", "function", "return", "local", "local"]
    );
    assert_eq!(
        texts_of(&highlight, source, HighlightKind::NUMBER),
        vec!["0x40", "2.5f"]
    );
}

#[test]
fn test_unclosed_params_end_with_function() {
    let source = "function f(a {";
    let highlight = eel(source);
    assert_eq!(
        texts_of(&highlight, source, HighlightKind::PARAMS),
        vec!["(a"]
    );
    assert_eq!(
        texts_of(&highlight, source, HighlightKind::FUNCTION),
        vec!["function f(a"]
    );
}

#[test]
fn test_declaration_without_body_is_dropped() {
    let source = "function foo(bar)";
    let highlight = eel(source);

    assert!(highlight.spans_of(HighlightKind::FUNCTION).is_empty());
    assert!(highlight.spans_of(HighlightKind::TITLE).is_empty());
    assert_eq!(
        texts_of(&highlight, source, HighlightKind::KEYWORD),
        vec!["function"]
    );
    assert!(!highlight.has_errors());
    assert_lossless(&highlight, source);
}

#[test]
fn test_declaration_keyword_must_be_whole_word() {
    let source = "functional(x) {";
    let highlight = eel(source);
    assert!(highlight.spans().is_empty());
}
