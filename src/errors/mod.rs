//! Error handling for grammar compilation and highlighting
//!
//! Two layers:
//! - [`Diagnostic`]: non-fatal findings recorded while scanning (illegal sequences,
//!   abandoned spans), carried inside a highlight result
//! - [`HighlightError`]: fatal failures returned from the public API

mod codes;
mod diagnostic;
mod error;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, DiagnosticBuilder, Severity};
pub use error::{HighlightError, Result};
