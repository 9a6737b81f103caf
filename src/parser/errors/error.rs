//! Diagnostics reported for documentation comments
//!
//! Provides:
//! - Error codes for categorization
//! - Severity levels
//! - Hints/suggestions for fixes

use text_size::TextRange;

use super::codes::ErrorCode;
use super::JavadocError;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
    Hint,
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
            Self::Hint => "hint",
        }
    }
}

/// A problem found in a documentation comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Human-readable error message
    pub message: String,
    /// Source location
    pub range: TextRange,
    /// Categorized error code
    pub code: ErrorCode,
    /// Error severity
    pub severity: Severity,
    /// Optional suggestion for fixing the error
    pub hint: Option<String>,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, range: TextRange, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            range,
            code,
            severity: Severity::Error,
            hint: None,
        }
    }

    /// Diagnostic for a core failure. Errors without an offset of their own
    /// are reported on `range`, usually the span of the offending tag.
    pub fn from_error(error: &JavadocError, range: TextRange) -> Self {
        let range = error.offset().map(TextRange::empty).unwrap_or(range);
        let diagnostic = Self::new(error.to_string(), range, ErrorCode::for_error(error));
        match error {
            JavadocError::MissingEnclosingName => {
                diagnostic.with_hint("qualify the reference with a type name, e.g. `Type#member`")
            }
            JavadocError::MalformedEscape { .. } => {
                diagnostic.with_hint("a unicode escape needs four hex digits, e.g. `\\u0040`")
            }
            _ => diagnostic,
        }
    }

    /// Add a hint to this diagnostic
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Set the severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Check if this diagnostic has a hint
    pub fn has_hint(&self) -> bool {
        self.hint.is_some()
    }

    /// Format the diagnostic for display
    pub fn format(&self) -> String {
        let mut result = format!("{}: {}", self.code, self.message);
        if let Some(hint) = &self.hint {
            result.push_str(&format!("\n  hint: {}", hint));
        }
        result
    }
}
