#![allow(clippy::unwrap_used)]

use eelhl::languages::eel;
use eelhl::{HighlightKind, KeywordCategory, TextSize};
use rstest::rstest;

use crate::helpers::highlight_helpers::{eel as highlight_eel, texts_of};

#[rstest]
#[case("function")]
#[case("procedure")]
#[case("if")]
#[case("local")]
#[case("return")]
#[case("throw")]
#[case("upvalue")]
#[case("export")]
fn test_keywords_classify_as_keyword(#[case] word: &str) {
    assert_eq!(eel::keywords().classify(word), Some(KeywordCategory::Keyword));

    let highlight = highlight_eel(word);
    assert_eq!(highlight.kind_at(TextSize::new(0)), Some(HighlightKind::KEYWORD));
}

#[rstest]
#[case("true")]
#[case("false")]
fn test_literals_classify_as_literal(#[case] word: &str) {
    assert_eq!(eel::keywords().classify(word), Some(KeywordCategory::Literal));

    let highlight = highlight_eel(word);
    assert_eq!(highlight.kind_at(TextSize::new(0)), Some(HighlightKind::LITERAL));
}

#[rstest]
#[case("Function")]
#[case("IF")]
#[case("Local")]
#[case("True")]
#[case("FALSE")]
fn test_classification_is_case_sensitive(#[case] word: &str) {
    assert_eq!(eel::keywords().classify(word), None);

    let highlight = highlight_eel(word);
    assert_eq!(highlight.kind_at(TextSize::new(0)), None);
    assert!(highlight.spans().is_empty());
}

#[rstest]
#[case("print")]
#[case("functional")]
#[case("locals")]
#[case("_if")]
fn test_other_identifiers_are_plain(#[case] word: &str) {
    let highlight = highlight_eel(word);
    assert!(highlight.spans().is_empty(), "{word} should stay plain");
}

#[test]
fn test_no_built_ins_are_declared() {
    let keywords = eel::keywords();
    assert!(keywords.categories().any(|c| c == KeywordCategory::BuiltIn));
    assert_eq!(keywords.words(KeywordCategory::BuiltIn).count(), 0);

    let source = "print(len(x))";
    let highlight = highlight_eel(source);
    assert!(texts_of(&highlight, source, HighlightKind::BUILT_IN).is_empty());
}

#[test]
fn test_keywords_inside_statement() {
    let source = "local ok = true; if ok return false;";
    let highlight = highlight_eel(source);
    assert_eq!(
        texts_of(&highlight, source, HighlightKind::KEYWORD),
        vec!["local", "if", "return"]
    );
    assert_eq!(
        texts_of(&highlight, source, HighlightKind::LITERAL),
        vec!["true", "false"]
    );
    assert_eq!(highlight.relevance(), 5);
}
