//! Javadoc parser core
//!
//! ## Architecture
//!
//! ```text
//! comment text
//!     ↓
//! CommentCursor → logical chars (unicode escapes decoded), line tracking
//!     ↓
//! TagDispatcher → recognizes tags, pushes identifiers into ParseContext
//!     ↓
//! construction bridge → one typed node per tag, pushed as a tagged group
//!     ↓
//! finalizer → references / thrown exceptions / parameters in source order
//!     ↓
//! Javadoc
//! ```
//!
//! When checking is off, [`JavadocParser::check_deprecation`] skips all of
//! this and only scans for `@deprecated`.

mod bridge;
mod context;
mod deprecation;
mod errors;
mod finalize;
mod javadoc_parser;
mod options;
mod reader;

pub use context::{AstGroup, CurrentToken, DocNode, ParseContext, TagCategory};
pub use errors::{Diagnostic, ErrorCode, JavadocError, Severity};
pub use finalize::finalize_javadoc;
pub use javadoc_parser::{JavadocParser, ParseState, TagDispatcher};
pub use options::{JavadocOptions, ProblemSeverity};
pub use reader::{COMMENT_CLOSER_LEN, COMMENT_OPENER_LEN, CommentCursor, is_java_whitespace};
