//! Foundation types for the highlighter.
//!
//! This module provides the position types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineIndex`] - Byte offset to line/column conversion
//! - [`Position`], [`Span`] - Line/column positions for editor-facing output
//!
//! This module has NO dependencies on other eelhl modules.

mod line_index;
mod position;

pub use line_index::LineIndex;
pub use position::{Position, Span};

// Re-export text-size types for convenience
pub use text_size;
pub use text_size::{TextRange, TextSize};
