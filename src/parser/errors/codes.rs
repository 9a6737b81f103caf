//! Error code definitions for Javadoc diagnostics
//!
//! Error codes follow a naming convention: J{category}{number}
//! - J01xx: Reader errors (escapes, comment bounds)
//! - J02xx: Tag structure errors
//! - J03xx: Reference errors
//! - J09xx: Internal errors

use std::fmt;

use super::JavadocError;

/// Error codes for Javadoc diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // J01xx: Reader errors
    // =========================================================================
    /// Truncated or invalid unicode escape
    J0101,
    /// Comment ended in the middle of a tag
    J0102,

    // =========================================================================
    // J02xx: Tag structure errors
    // =========================================================================
    /// `@param` without a parameter name
    J0201,
    /// `@throws` / `@exception` without a type
    J0202,
    /// `@see` / `{@link}` without a reference
    J0203,
    /// Unterminated inline tag `{@...`
    J0204,

    // =========================================================================
    // J03xx: Reference errors
    // =========================================================================
    /// Invalid reference syntax
    J0301,
    /// Unclosed argument list in a method reference
    J0302,
    /// Reference without receiver in an unnamed type
    J0303,

    // =========================================================================
    // J09xx: Internal errors
    // =========================================================================
    /// Parse stack contract violated
    J0999,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "J0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::J0101 => "J0101",
            Self::J0102 => "J0102",
            Self::J0201 => "J0201",
            Self::J0202 => "J0202",
            Self::J0203 => "J0203",
            Self::J0204 => "J0204",
            Self::J0301 => "J0301",
            Self::J0302 => "J0302",
            Self::J0303 => "J0303",
            Self::J0999 => "J0999",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::J0101 | Self::J0102 => "reader error",
            Self::J0201 | Self::J0202 | Self::J0203 | Self::J0204 => "tag error",
            Self::J0301 | Self::J0302 | Self::J0303 => "reference error",
            Self::J0999 => "internal error",
        }
    }

    /// Code for a core failure.
    pub fn for_error(error: &JavadocError) -> Self {
        match error {
            JavadocError::MalformedEscape { .. } => Self::J0101,
            JavadocError::ReadPastEnd { .. } => Self::J0102,
            JavadocError::MissingEnclosingName => Self::J0303,
            JavadocError::StackContractViolation { .. } => Self::J0999,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
