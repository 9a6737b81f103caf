//! The Javadoc parser entry point.

use smol_str::SmolStr;
use text_size::TextRange;
use tracing::debug;

use super::context::ParseContext;
use super::deprecation::scan_for_deprecated;
use super::errors::JavadocError;
use super::options::JavadocOptions;
use super::reader::CommentCursor;
use crate::base::LineLookup;
use crate::syntax::Javadoc;

/// Recognizes tags in a comment and drives the construction operations.
///
/// The dispatcher owns the tag grammar; the parser owns node construction
/// and the final ordering. `parse_comment` is called once per comment with
/// the cursor already set up for line tracking; the parser finalizes the
/// Javadoc node after it returns.
pub trait TagDispatcher {
    fn parse_comment(
        &mut self,
        parser: &mut JavadocParser,
        cursor: &mut CommentCursor<'_>,
        lines: &dyn LineLookup,
    ) -> Result<(), JavadocError>;
}

/// Where a parser is in its pass over one comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseState {
    #[default]
    Start,
    Scanning,
    Finalized,
    /// The Javadoc node was handed to its declaration, or the parse failed
    /// and there is none
    Done,
}

/// Parser for one documentation comment at a time.
///
/// Not shareable between threads while parsing; use one instance per
/// comment (or per compilation unit) to parallelize.
#[derive(Debug)]
pub struct JavadocParser {
    options: JavadocOptions,
    /// Simple name of the enclosing compilation unit's main type
    enclosing_type_name: Option<SmolStr>,
    pub(crate) context: ParseContext,
    pub(crate) javadoc: Option<Javadoc>,
    pub(crate) state: ParseState,
}

impl JavadocParser {
    pub fn new(options: JavadocOptions) -> Self {
        Self {
            options,
            enclosing_type_name: None,
            context: ParseContext::new(),
            javadoc: None,
            state: ParseState::Start,
        }
    }

    /// Name used as receiver for `#member` references without a type.
    pub fn with_enclosing_type_name(mut self, name: impl Into<SmolStr>) -> Self {
        self.enclosing_type_name = Some(name.into());
        self
    }

    pub fn options(&self) -> &JavadocOptions {
        &self.options
    }

    pub fn check_javadoc(&self) -> bool {
        self.options.check_javadoc()
    }

    pub fn enclosing_type_name(&self) -> Option<&str> {
        self.enclosing_type_name.as_deref()
    }

    pub fn context(&self) -> &ParseContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut ParseContext {
        &mut self.context
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    pub fn javadoc(&self) -> Option<&Javadoc> {
        self.javadoc.as_ref()
    }

    /// Hand the Javadoc node over to its declaration.
    pub fn take_javadoc(&mut self) -> Option<Javadoc> {
        self.state = ParseState::Done;
        self.javadoc.take()
    }

    /// Returns true if the comment carries an `@deprecated` tag.
    ///
    /// With checking enabled the whole comment is parsed through `dispatcher`
    /// and the Javadoc node is finalized; the deprecation flag then comes from
    /// that parse. Otherwise a light line-by-line scan runs and the Javadoc
    /// node is only created when missing-comment diagnostics need it.
    ///
    /// `comment` spans the comment including `/**` and `*/`. The source is
    /// only borrowed for the duration of the call.
    pub fn check_deprecation(
        &mut self,
        source: &str,
        lines: &dyn LineLookup,
        comment: TextRange,
        dispatcher: &mut dyn TagDispatcher,
    ) -> Result<bool, JavadocError> {
        self.context.clear();
        self.state = ParseState::Scanning;
        let mut cursor = CommentCursor::new(source, comment);

        if self.options.check_javadoc() {
            self.javadoc = Some(Javadoc::new(comment));
            cursor.init_line_end(lines);
            let parsed = dispatcher
                .parse_comment(self, &mut cursor, lines)
                .and_then(|()| self.finalize());
            if let Err(error) = parsed {
                self.abandon();
                return Err(error);
            }
            debug!(
                deprecated = self.context.deprecated,
                "parsed javadoc at {:?}", comment
            );
            return Ok(self.context.deprecated);
        }

        self.javadoc = self
            .options
            .needs_javadoc_node()
            .then(|| Javadoc::new(comment));
        let deprecated = scan_for_deprecated(&mut cursor, lines, comment)?;
        self.context.deprecated = deprecated;
        self.state = ParseState::Finalized;
        debug!(deprecated, "scanned javadoc at {:?}", comment);
        Ok(deprecated)
    }

    /// Drop everything built for a comment whose parse failed.
    fn abandon(&mut self) {
        self.javadoc = None;
        self.context.clear();
        self.state = ParseState::Done;
    }
}

impl Default for JavadocParser {
    fn default() -> Self {
        Self::new(JavadocOptions::default())
    }
}
