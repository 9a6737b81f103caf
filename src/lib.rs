//! # jdoc-base
//!
//! Parser for Javadoc comments attached to source declarations.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! batch     → Parallel driver, one parser per comment
//!   ↓
//! tags      → Standard tag dispatcher (@see, @param, @throws, @return, {@link})
//!   ↓
//! parser    → JavadocParser: reader, deprecation scan, node construction, finalizer
//!   ↓
//! syntax    → Javadoc AST node types
//!   ↓
//! base      → Primitives (TextRange, LineIndex, Position)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → parser → tags → batch)
// ============================================================================

/// Foundation types: TextRange, LineIndex, Position
pub mod base;

/// Javadoc AST: type references, member references, the Javadoc node
pub mod syntax;

/// Javadoc parser core: character reader, construction bridge, finalizer
pub mod parser;

/// Standard tag dispatcher driving the parser core
pub mod tags;

/// Parallel parsing of many comments
pub mod batch;

pub use base::{LineIndex, LineLookup, Position, Span, TextRange, TextSize};
pub use parser::{Diagnostic, JavadocError, JavadocOptions, JavadocParser, ProblemSeverity};
pub use syntax::Javadoc;
