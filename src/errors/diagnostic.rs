//! Scan diagnostics
//!
//! Provides rich information about text the engine refused to classify:
//! - Error codes for categorization
//! - Severity levels
//! - Hints
//! - The scope the scan was in when it happened

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use super::codes::ErrorCode;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// The scan had to reject input at the top level
    #[default]
    Error,
    /// A nested span was dropped
    Warning,
}

impl Severity {
    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// A non-fatal finding recorded during a highlight scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Human-readable message
    pub message: String,
    /// Source location
    pub range: TextRange,
    pub code: ErrorCode,
    pub severity: Severity,
    /// Optional suggestion for fixing the input
    pub hint: Option<String>,
    /// Category of the rule being scanned, if any
    pub scope: Option<SmolStr>,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, range: TextRange, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            range,
            code,
            severity: Severity::Error,
            hint: None,
            scope: None,
        }
    }

    /// Create a diagnostic at a specific offset with zero-width range
    pub fn at_offset(message: impl Into<String>, offset: TextSize, code: ErrorCode) -> Self {
        Self::new(message, TextRange::empty(offset), code)
    }

    pub fn builder(code: ErrorCode) -> DiagnosticBuilder {
        DiagnosticBuilder::new(code)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn has_hint(&self) -> bool {
        self.hint.is_some()
    }

    /// Format the diagnostic for display
    pub fn format(&self) -> String {
        let mut result = format!("{}: {}", self.code, self.message);
        if let Some(scope) = &self.scope {
            result.push_str(&format!(" (in {scope})"));
        }
        if let Some(hint) = &self.hint {
            result.push_str(&format!("\n  hint: {hint}"));
        }
        result
    }
}

/// Builder for diagnostics with optional parts
pub struct DiagnosticBuilder {
    code: ErrorCode,
    message: Option<String>,
    range: Option<TextRange>,
    severity: Severity,
    hint: Option<String>,
    scope: Option<SmolStr>,
}

impl DiagnosticBuilder {
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            message: None,
            range: None,
            severity: Severity::Error,
            hint: None,
            scope: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn range(mut self, range: TextRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Set the offset (creates an empty range at that position)
    pub fn at_offset(mut self, offset: TextSize) -> Self {
        self.range = Some(TextRange::empty(offset));
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn scope(mut self, scope: impl Into<SmolStr>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Build the diagnostic, falling back to the code's default message and an
    /// empty range at offset 0
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            message: self
                .message
                .unwrap_or_else(|| self.code.default_message().to_string()),
            range: self
                .range
                .unwrap_or_else(|| TextRange::empty(TextSize::new(0))),
            code: self.code,
            severity: self.severity,
            hint: self.hint,
            scope: self.scope,
        }
    }
}
