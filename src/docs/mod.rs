//! Documentation pages
//!
//! Finds fenced code blocks in Markdown pages and highlights each one with the
//! grammar named by its info string, the way a docs site highlights every
//! tagged block once when a page loads.

mod blocks;
mod loader;

pub use blocks::{CodeBlock, extract_code_blocks};
pub use loader::{collect_page_paths, load_pages};

use std::path::PathBuf;

use crate::engine::Highlight;
use crate::registry::Registry;

/// A code block and its highlight
#[derive(Debug, Clone)]
pub struct HighlightedBlock {
    pub block: CodeBlock,
    pub highlight: Highlight,
}

/// All highlighted blocks of one page
#[derive(Debug, Clone, Default)]
pub struct PageHighlight {
    pub path: Option<PathBuf>,
    pub blocks: Vec<HighlightedBlock>,
    /// Blocks left unhighlighted (unknown language, or rejected in strict mode)
    pub skipped: usize,
}

/// Highlight every eligible code block of a page.
///
/// Tagged blocks use their language; untagged blocks go through
/// auto-detection. Blocks tagged with unregistered languages are skipped.
pub fn highlight_page(registry: &Registry, page: &str) -> PageHighlight {
    let mut result = PageHighlight::default();

    for block in extract_code_blocks(page) {
        let code = block.code(page);
        let highlight = match &block.language {
            Some(language) if !registry.contains(language) => {
                tracing::debug!(%language, "skipping block in unregistered language");
                None
            }
            Some(language) => match registry.highlight(language, code) {
                Ok(highlight) => Some(highlight),
                Err(err) => {
                    tracing::warn!(%language, %err, "failed to highlight code block");
                    None
                }
            },
            None => registry.highlight_auto(code, None),
        };

        match highlight {
            Some(highlight) => result.blocks.push(HighlightedBlock { block, highlight }),
            None => result.skipped += 1,
        }
    }

    result
}
