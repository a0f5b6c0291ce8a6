#![allow(clippy::unwrap_used)]

use eelhl::{ErrorCode, HighlightError, HighlightKind, HighlightOptions, Registry, Severity};
use rstest::rstest;

use crate::helpers::highlight_helpers::{assert_lossless, eel, texts_of};

#[rstest]
#[case::double_quote("function foo(\"x\") {")]
#[case::single_quote("function foo('x') {")]
fn test_quote_in_params_drops_params_span(#[case] source: &str) {
    let highlight = eel(source);

    assert!(highlight.spans_of(HighlightKind::PARAMS).is_empty());
    assert!(highlight.spans_of(HighlightKind::STRING).is_empty());
    assert_eq!(highlight.spans_of(HighlightKind::FUNCTION).len(), 1);

    let diagnostic = &highlight.diagnostics()[0];
    assert_eq!(diagnostic.code, ErrorCode::E0101);
    assert_eq!(diagnostic.severity, Severity::Warning);
    assert_eq!(diagnostic.scope.as_deref(), Some("params"));
    assert_lossless(&highlight, source);
}

#[test]
fn test_closing_tag_at_top_level_is_reported() {
    let source = "local a </script> return a";
    let highlight = eel(source);

    assert!(highlight.has_errors());
    let diagnostic = &highlight.diagnostics()[0];
    assert_eq!(diagnostic.code, ErrorCode::E0101);
    assert_eq!(&source[diagnostic.range], "</");

    // highlighting resumes after the illegal lexeme
    assert_eq!(
        texts_of(&highlight, source, HighlightKind::KEYWORD),
        vec!["local", "return"]
    );
    assert_lossless(&highlight, source);
}

#[rstest]
#[case("a < b")]
#[case("x / 2")]
#[case("<tag>")]
fn test_lone_angle_or_slash_is_fine(#[case] source: &str) {
    assert!(eel(source).diagnostics().is_empty());
}

#[test]
fn test_closing_tag_inside_string_is_not_illegal() {
    let source = r#""</b>""#;
    let highlight = eel(source);
    assert!(highlight.diagnostics().is_empty());
    assert_eq!(texts_of(&highlight, source, HighlightKind::STRING), vec![source]);
}

#[test]
fn test_strict_mode_rejects_top_level_illegal() {
    let registry = Registry::builder()
        .builtin()
        .options(HighlightOptions::default().with_strict(true))
        .build()
        .unwrap();

    let err = registry.highlight("eel", "return </x>").unwrap_err();
    match err {
        HighlightError::Illegal { offset, lexeme } => {
            assert_eq!(offset, 7);
            assert_eq!(lexeme, "</");
        }
        other => panic!("expected Illegal, got {other:?}"),
    }
    assert_eq!(
        registry
            .highlight("eel", "return </x>")
            .unwrap_err()
            .code(),
        Some(ErrorCode::E0101)
    );
}

#[test]
fn test_strict_mode_still_drops_nested_illegal() {
    let registry = Registry::builder()
        .builtin()
        .options(HighlightOptions::default().with_strict(true))
        .build()
        .unwrap();

    let highlight = registry.highlight("eel", "function foo(\"x\") {").unwrap();
    assert!(highlight.spans_of(HighlightKind::PARAMS).is_empty());
    assert!(!highlight.has_errors());
}

#[test]
fn test_depth_limit_drops_nested_rules() {
    let registry = Registry::builder()
        .builtin()
        .options(HighlightOptions::default().with_max_depth(1))
        .build()
        .unwrap();
    let source = "function foo(bar) {";

    let highlight = registry.highlight("eel", source).unwrap();
    assert_eq!(highlight.spans_of(HighlightKind::FUNCTION).len(), 1);
    assert!(highlight.spans_of(HighlightKind::PARAMS).is_empty());
    assert!(
        highlight
            .diagnostics()
            .iter()
            .any(|d| d.code == ErrorCode::E0103)
    );
    assert_lossless(&highlight, source);
}
