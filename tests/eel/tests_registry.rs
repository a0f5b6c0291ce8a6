#![allow(clippy::unwrap_used)]

use eelhl::{Grammar, HighlightKind, HighlightOptions, Primitives, Registry, languages};
use rstest::rstest;

use crate::helpers::highlight_helpers::REGISTRY;
use crate::helpers::source_fixtures::{EXPORTED_MODULE, PROCEDURE_WITH_BODY};

#[test]
fn test_registering_twice_gives_identical_results() {
    let once = Registry::builder().builtin().build().unwrap();
    let twice = Registry::builder().builtin().builtin().build().unwrap();

    assert_eq!(twice.languages().count(), 1);
    for source in [PROCEDURE_WITH_BODY, EXPORTED_MODULE] {
        assert_eq!(
            once.highlight("eel", source).unwrap(),
            twice.highlight("eel", source).unwrap()
        );
    }
}

#[test]
fn test_grammar_construction_is_deterministic() {
    let primitives = Primitives::new();
    let a: Grammar = languages::eel::grammar(&primitives);
    let b: Grammar = languages::eel::grammar(&Primitives::default());
    assert_eq!(a, b);
}

#[test]
fn test_highlighting_is_repeatable() {
    let first = REGISTRY.highlight("eel", PROCEDURE_WITH_BODY).unwrap();
    let second = REGISTRY.highlight("eel", PROCEDURE_WITH_BODY).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_concurrent_highlighting_matches_sequential() {
    let expected = REGISTRY.highlight("eel", EXPORTED_MODULE).unwrap();

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| REGISTRY.highlight("eel", EXPORTED_MODULE).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for result in results {
        assert_eq!(result, expected);
    }
}

#[test]
fn test_language_lookup_by_name() {
    assert!(REGISTRY.contains("eel"));
    assert!(REGISTRY.contains("EEL"));
    assert!(!REGISTRY.contains("lua"));
    assert_eq!(REGISTRY.get("eel").unwrap().name(), "eel");
}

#[test]
fn test_auto_detects_eel() {
    let highlight = REGISTRY.highlight_auto(PROCEDURE_WITH_BODY, None).unwrap();
    assert_eq!(highlight.language(), "eel");
    assert!(!highlight.spans_of(HighlightKind::FUNCTION).is_empty());
}

#[test]
fn test_auto_rejects_plain_prose() {
    assert!(REGISTRY.highlight_auto("just some words", None).is_none());
}

#[rstest]
#[case::default_threshold(HighlightOptions::default(), true)]
#[case::at_score(HighlightOptions::default().with_min_relevance_for_auto(3), true)]
#[case::above_score(HighlightOptions::default().with_min_relevance_for_auto(4), false)]
fn test_auto_detect_threshold(#[case] options: HighlightOptions, #[case] accepted: bool) {
    // keyword "function" + function + params
    let source = "function foo(bar) {";
    let registry = Registry::builder().builtin().options(options).build().unwrap();
    assert_eq!(registry.highlight("eel", source).unwrap().relevance(), 3);
    assert_eq!(registry.highlight_auto(source, None).is_some(), accepted);
}
