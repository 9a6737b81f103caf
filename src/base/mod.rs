//! Foundation types for the Javadoc parser.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineLookup`], [`LineIndex`] - Line number / line boundary queries
//! - [`Position`], [`Span`] - Line/column positions for diagnostics
//!
//! This module has NO dependencies on other jdoc modules.

mod line_index;
mod position;

pub use line_index::{LineIndex, LineLookup};
pub use position::{Position, Span};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
