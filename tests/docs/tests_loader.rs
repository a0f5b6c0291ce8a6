#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;

use eelhl::docs::{collect_page_paths, extract_code_blocks, load_pages};
use eelhl::{HighlightError, HighlightKind, HighlightOptions};
use tempfile::TempDir;

use crate::helpers::highlight_helpers::REGISTRY;

const GUIDE: &str = "# Guide\n\n```eel\nfunction main() {\n\treturn 0;\n}\n```\n";
const REFERENCE: &str = "Intro\n\n~~~eel\nlocal s = \"x\";\n~~~\n\n```lua\nprint(1)\n```\n";

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn docs_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "guide.md", GUIDE);
    write(dir.path(), "api/reference.markdown", REFERENCE);
    write(dir.path(), "api/notes.txt", "```eel\nlocal x\n```\n");
    write(dir.path(), "assets/eel.js", "hljs.registerLanguage('eel', eel);");
    dir
}

#[test]
fn test_collect_page_paths_filters_by_extension() {
    let dir = docs_tree();
    let paths = collect_page_paths(dir.path(), &HighlightOptions::default()).unwrap();
    let names: Vec<_> = paths
        .iter()
        .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();
    assert_eq!(names, vec!["api/reference.markdown", "guide.md"]);
}

#[test]
fn test_collect_page_paths_with_custom_extensions() {
    let dir = docs_tree();
    let options = HighlightOptions::default().with_page_extensions(["txt"]);
    let paths = collect_page_paths(dir.path(), &options).unwrap();
    assert_eq!(paths.len(), 1);
    assert!(paths[0].ends_with("api/notes.txt"));
}

#[test]
fn test_load_pages_highlights_every_block_once() {
    let dir = docs_tree();
    let pages = load_pages(&REGISTRY, dir.path()).unwrap();
    assert_eq!(pages.len(), 2);

    let reference = &pages[0];
    assert!(reference.path.as_ref().unwrap().ends_with("api/reference.markdown"));
    assert_eq!(reference.blocks.len(), 1);
    assert_eq!(reference.skipped, 1);
    let strings = reference.blocks[0].highlight.spans_of(HighlightKind::STRING);
    assert_eq!(strings.len(), 1);

    let guide = &pages[1];
    assert_eq!(guide.blocks.len(), 1);
    assert_eq!(guide.skipped, 0);
    let block = &guide.blocks[0];
    assert_eq!(block.block.language.as_deref(), Some("eel"));
    assert_eq!(block.highlight.text(), block.block.code(GUIDE));
    assert_eq!(block.highlight.spans_of(HighlightKind::FUNCTION).len(), 1);
}

#[test]
fn test_load_pages_empty_directory() {
    let dir = TempDir::new().unwrap();
    assert!(load_pages(&REGISTRY, dir.path()).unwrap().is_empty());
}

#[test]
fn test_load_pages_missing_directory() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");
    let err = load_pages(&REGISTRY, &missing).unwrap_err();
    assert!(matches!(err, HighlightError::Io(_)));
}

#[test]
fn test_extract_blocks_matches_loader_input() {
    let blocks = extract_code_blocks(REFERENCE);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].code(REFERENCE), "local s = \"x\";\n");
    assert_eq!(blocks[1].language.as_deref(), Some("lua"));
}
