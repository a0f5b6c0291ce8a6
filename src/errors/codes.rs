//! Error code definitions for highlighting diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Scan errors (illegal sequences, unterminated spans)
//! - E02xx: Grammar errors (patterns that cannot be compiled or used)
//! - E09xx: Generic/fallback errors

use std::fmt;

/// Error codes for highlighting diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Scan errors
    // =========================================================================
    /// Illegal sequence matched in the current scope
    E0101,
    /// Span reached end of input before its end marker
    E0102,
    /// Rule nesting exceeded the configured depth
    E0103,

    // =========================================================================
    // E02xx: Grammar errors
    // =========================================================================
    /// Pattern failed to compile
    E0201,
    /// Rule has neither a begin pattern nor begin keywords
    E0202,

    // =========================================================================
    // E09xx: Generic/fallback errors
    // =========================================================================
    /// No language registered under the requested name
    E0901,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0101")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0901 => "E0901",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 | Self::E0103 => "scan error",
            Self::E0201 | Self::E0202 => "grammar error",
            Self::E0901 => "highlight error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "illegal sequence",
            Self::E0102 => "unterminated span",
            Self::E0103 => "rule nesting too deep",
            Self::E0201 => "invalid pattern",
            Self::E0202 => "rule has no begin",
            Self::E0901 => "unknown language",
        }
    }

    /// Check if this is a scan error (E01xx)
    pub fn is_scan_error(&self) -> bool {
        self.as_str().starts_with("E01")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
