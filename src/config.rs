//! Highlighting options.

/// Default cap on nested rule depth
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Extensions of documentation pages scanned by [`crate::docs::load_pages`]
pub const DEFAULT_PAGE_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Options shared by every highlight a [`crate::Registry`] performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightOptions {
    /// Fail with [`crate::HighlightError::Illegal`] on a top-level illegal
    /// sequence instead of recording a diagnostic and continuing
    pub strict: bool,
    /// Rules nested deeper than this are not entered
    pub max_depth: usize,
    /// Auto-detection ignores results scoring below this
    pub min_relevance_for_auto: u32,
    pub page_extensions: Vec<String>,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            strict: false,
            max_depth: DEFAULT_MAX_DEPTH,
            min_relevance_for_auto: 1,
            page_extensions: DEFAULT_PAGE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }
}

impl HighlightOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_min_relevance_for_auto(mut self, min: u32) -> Self {
        self.min_relevance_for_auto = min;
        self
    }

    pub fn with_page_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.page_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a file extension names a documentation page
    pub fn is_page_extension(&self, ext: &str) -> bool {
        self.page_extensions
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(ext))
    }
}
