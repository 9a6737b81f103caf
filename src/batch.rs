//! Parsing many comments of one source file.
//!
//! Every comment gets its own [`JavadocParser`] and [`StandardTagScanner`],
//! so comments are parsed in parallel with no shared mutable state. The
//! options are shared read-only.

use rayon::prelude::*;
use smol_str::SmolStr;
use text_size::TextRange;

use crate::base::LineLookup;
use crate::parser::{Diagnostic, JavadocError, JavadocOptions, JavadocParser};
use crate::syntax::Javadoc;
use crate::tags::StandardTagScanner;

/// Result of parsing one comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentOutcome {
    pub deprecated: bool,
    /// Present when checking is on, or when missing-comment diagnostics
    /// need the node
    pub javadoc: Option<Javadoc>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse a single comment with the standard tag scanner.
pub fn parse_comment(
    source: &str,
    lines: &dyn LineLookup,
    comment: TextRange,
    options: &JavadocOptions,
    enclosing_type_name: Option<&str>,
) -> Result<CommentOutcome, JavadocError> {
    let mut parser = JavadocParser::new(options.clone());
    if let Some(name) = enclosing_type_name {
        parser = parser.with_enclosing_type_name(name);
    }
    let mut scanner = StandardTagScanner::new();
    let deprecated = parser.check_deprecation(source, lines, comment, &mut scanner)?;
    Ok(CommentOutcome {
        deprecated,
        javadoc: parser.take_javadoc(),
        diagnostics: scanner.take_diagnostics(),
    })
}

/// Parse every comment in `comments`, in parallel. Results come back in
/// input order; a failure affects only its own comment.
pub fn parse_comments<L>(
    source: &str,
    lines: &L,
    comments: &[TextRange],
    options: &JavadocOptions,
    enclosing_type_name: Option<&str>,
) -> Vec<Result<CommentOutcome, JavadocError>>
where
    L: LineLookup + Sync,
{
    let enclosing: Option<SmolStr> = enclosing_type_name.map(SmolStr::new);
    comments
        .par_iter()
        .map(|&comment| parse_comment(source, lines, comment, options, enclosing.as_deref()))
        .collect()
}
