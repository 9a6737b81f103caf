//! Failures raised by the parser core.

use text_size::TextSize;
use thiserror::Error;

/// Errors surfaced by the character reader, construction bridge and finalizer.
///
/// None of these abort the enclosing declaration; the dispatcher decides
/// whether to drop the tag, drop the comment, or report a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JavadocError {
    /// The parse stacks did not hold what an operation expected.
    #[error("stack contract violated in {operation}: {detail}")]
    StackContractViolation {
        operation: &'static str,
        detail: String,
    },

    /// A reference without receiver, while the enclosing type has no name.
    #[error("reference has no receiver and the enclosing type is unnamed")]
    MissingEnclosingName,

    /// Truncated or invalid `\uXXXX` sequence.
    #[error("malformed unicode escape at offset {}", u32::from(*offset))]
    MalformedEscape { offset: TextSize },

    /// The reader was asked for a character past the scan boundary.
    #[error("read past the end of the comment at offset {}", u32::from(*offset))]
    ReadPastEnd { offset: TextSize },
}

impl JavadocError {
    /// Create a stack contract violation.
    pub fn contract(operation: &'static str, detail: impl Into<String>) -> Self {
        Self::StackContractViolation {
            operation,
            detail: detail.into(),
        }
    }

    /// Reader errors end the usable input of a comment.
    pub fn is_read_error(&self) -> bool {
        matches!(self, Self::MalformedEscape { .. } | Self::ReadPastEnd { .. })
    }

    /// Offset the error points at, when it has one.
    pub fn offset(&self) -> Option<TextSize> {
        match self {
            Self::MalformedEscape { offset } | Self::ReadPastEnd { offset } => Some(*offset),
            Self::StackContractViolation { .. } | Self::MissingEnclosingName => None,
        }
    }
}
