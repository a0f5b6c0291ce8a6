//! Page discovery and parallel highlighting.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use walkdir::WalkDir;

use super::{PageHighlight, highlight_page};
use crate::config::HighlightOptions;
use crate::errors::{HighlightError, Result};
use crate::registry::Registry;

/// Collect documentation pages under `root`, sorted by path.
pub fn collect_page_paths(root: &Path, options: &HighlightOptions) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|err| HighlightError::Io(err.into()))?;
        let is_page = entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| options.is_page_extension(ext));
        if is_page {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

/// Highlight every code block of every page under `root`, once.
///
/// Pages are read and highlighted in parallel; results keep path order.
pub fn load_pages(registry: &Registry, root: &Path) -> Result<Vec<PageHighlight>> {
    let paths = collect_page_paths(root, registry.options())?;
    tracing::debug!(pages = paths.len(), root = %root.display(), "highlighting pages");

    paths
        .par_iter()
        .map(|path| -> Result<PageHighlight> {
            let page = std::fs::read_to_string(path)?;
            let mut result = highlight_page(registry, &page);
            result.path = Some(path.clone());
            Ok(result)
        })
        .collect()
}
