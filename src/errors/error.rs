//! Error types for the public API.

use smol_str::SmolStr;
use thiserror::Error;

use super::codes::ErrorCode;

pub type Result<T, E = HighlightError> = std::result::Result<T, E>;

/// Errors returned by grammar compilation, registry lookups and highlighting.
#[derive(Debug, Error)]
pub enum HighlightError {
    /// No grammar registered under the name.
    #[error("unknown language: {0}")]
    UnknownLanguage(SmolStr),

    /// A grammar pattern failed to compile.
    #[error("invalid pattern `{pattern}` in {language}: {source}")]
    InvalidPattern {
        language: SmolStr,
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    /// A rule can never start.
    #[error("rule without begin in {language}")]
    MissingBegin { language: SmolStr },

    /// Illegal sequence at the top level while highlighting in strict mode.
    #[error("illegal sequence `{lexeme}` at offset {offset}")]
    Illegal { offset: u32, lexeme: String },

    /// IO error while loading pages.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HighlightError {
    pub fn invalid_pattern(
        language: impl Into<SmolStr>,
        pattern: impl Into<String>,
        source: regex::Error,
    ) -> Self {
        Self::InvalidPattern {
            language: language.into(),
            pattern: pattern.into(),
            source: Box::new(source),
        }
    }

    /// Diagnostic code corresponding to this error, if any
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::UnknownLanguage(_) => Some(ErrorCode::E0901),
            Self::InvalidPattern { .. } => Some(ErrorCode::E0201),
            Self::MissingBegin { .. } => Some(ErrorCode::E0202),
            Self::Illegal { .. } => Some(ErrorCode::E0101),
            Self::Io(_) => None,
        }
    }
}
