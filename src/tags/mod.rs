//! Standard tag dispatcher.
//!
//! Walks a comment, recognizes block tags at the start of a line and inline
//! `{@...}` tags anywhere, and drives the parser's construction operations:
//!
//! | Tag                         | Node                         | Category         |
//! |-----------------------------|------------------------------|------------------|
//! | `@param name`               | `SingleNameReference`        | `Parameter`      |
//! | `@throws T`, `@exception T` | `TypeReference`              | `ThrownType`     |
//! | `@see ref`, `{@link ref}`   | `Reference`                  | `CrossReference` |
//! | `@return`                   | `ReturnStatement` (one slot) |                  |
//! | `@deprecated`               | deprecation flag             |                  |
//! | `{@inheritDoc}`             | inherited flag               |                  |
//!
//! A malformed tag is dropped with a diagnostic and scanning goes on. A
//! reader error ends the scan; what was built so far is kept.

mod lexing;
mod reference;

use text_size::{TextRange, TextSize};
use tracing::{trace, warn};

use crate::base::LineLookup;
use crate::parser::{
    CommentCursor, CurrentToken, Diagnostic, ErrorCode, JavadocError, JavadocParser, Severity,
    TagCategory, TagDispatcher, is_java_whitespace,
};
use lexing::{eat, peek, read_identifier, skip_past, skip_spaces};
use reference::{parse_reference, push_qualified_name};

/// Why a single tag could not be built.
#[derive(Debug)]
pub(crate) enum TagFailure {
    /// The tag text is malformed
    Syntax(Diagnostic),
    /// The parser core refused the tag
    Core(JavadocError),
}

impl TagFailure {
    fn syntax(code: ErrorCode, message: impl Into<String>, range: TextRange) -> Self {
        Self::Syntax(Diagnostic::new(message, range, code))
    }
}

impl From<JavadocError> for TagFailure {
    fn from(error: JavadocError) -> Self {
        Self::Core(error)
    }
}

/// What to do after a tag failed.
enum Recovery {
    Continue,
    Stop,
}

/// The default [`TagDispatcher`].
#[derive(Debug, Default)]
pub struct StandardTagScanner {
    diagnostics: Vec<Diagnostic>,
    severity: Severity,
    saw_inherit_doc: bool,
    saw_other_content: bool,
}

impl StandardTagScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics reported so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    fn scan(
        &mut self,
        parser: &mut JavadocParser,
        cursor: &mut CommentCursor<'_>,
        lines: &dyn LineLookup,
    ) -> Result<(), JavadocError> {
        while cursor.has_more() {
            let start = cursor.offset();
            let c = match cursor.read_char() {
                Ok(c) => c,
                Err(error) => {
                    self.report_error(&error, TextRange::empty(start));
                    return Ok(());
                }
            };
            cursor.update_line_end(lines);

            let outcome = match c {
                '@' if !cursor.line_started() => {
                    cursor.set_line_started(true);
                    self.saw_other_content = true;
                    self.block_tag(parser, cursor, start)
                }
                '{' if peek(cursor).ok().flatten() == Some('@') => {
                    cursor.set_line_started(true);
                    self.inline_tag(parser, cursor, start)
                }
                '*' if !cursor.line_started() => Ok(()),
                c if is_java_whitespace(c) => Ok(()),
                _ => {
                    cursor.set_line_started(true);
                    self.saw_other_content = true;
                    Ok(())
                }
            };

            if let Err(failure) = outcome {
                parser.context_mut().reset_identifiers();
                match self.recover(failure, parser.context().tag_range())? {
                    Recovery::Continue => {}
                    Recovery::Stop => return Ok(()),
                }
            }
            cursor.update_line_end(lines);
        }
        Ok(())
    }

    /// `@name ...` at the start of a line; `at` is the offset of `@`.
    fn block_tag(
        &mut self,
        parser: &mut JavadocParser,
        cursor: &mut CommentCursor<'_>,
        at: TextSize,
    ) -> Result<(), TagFailure> {
        let Some(name) = read_identifier(cursor)? else {
            return Ok(());
        };
        let tag_range = TextRange::new(at, name.range.end());
        parser.context_mut().set_tag_range(tag_range);
        trace!(tag = %name.text, "block tag");

        match name.text.as_str() {
            "param" => {
                skip_spaces(cursor)?;
                let param = read_parameter_name(cursor)?.ok_or_else(|| {
                    TagFailure::syntax(ErrorCode::J0201, "missing parameter name", tag_range)
                })?;
                parser.context_mut().set_current_token(param);
                let node = parser.build_single_name_reference();
                parser.context_mut().push_node(TagCategory::Parameter, node);
            }
            "throws" | "exception" => {
                skip_spaces(cursor)?;
                push_qualified_name(parser, cursor)?;
                let type_ref = parser.build_type_reference()?.ok_or_else(|| {
                    TagFailure::syntax(ErrorCode::J0202, "missing exception type", tag_range)
                })?;
                parser.context_mut().push_node(TagCategory::ThrownType, type_ref);
            }
            "return" => {
                parser.context_mut().set_current_token(CurrentToken {
                    text: name.text.clone(),
                    range: tag_range,
                    raw_end: tag_range.end(),
                });
                parser.build_return_statement();
            }
            "see" => {
                if let Some(reference) = parse_reference(parser, cursor)? {
                    parser
                        .context_mut()
                        .push_node(TagCategory::CrossReference, reference);
                }
            }
            "deprecated" => parser.context_mut().set_deprecated(true),
            _ => {}
        }
        parser.context_mut().reset_identifiers();
        Ok(())
    }

    /// `{@name ...}`; `brace` is the offset of `{`.
    fn inline_tag(
        &mut self,
        parser: &mut JavadocParser,
        cursor: &mut CommentCursor<'_>,
        brace: TextSize,
    ) -> Result<(), TagFailure> {
        eat(cursor, '@')?;
        let name = read_identifier(cursor)?;
        let tag_end = name.as_ref().map_or(cursor.offset(), |name| name.range.end());
        let tag_range = TextRange::new(brace, tag_end);
        parser.context_mut().set_tag_range(tag_range);

        match name.as_ref().map(|name| name.text.as_str()) {
            Some("inheritDoc") => self.saw_inherit_doc = true,
            Some("link") | Some("linkplain") => {
                self.saw_other_content = true;
                if let Some(reference) = parse_reference(parser, cursor)? {
                    parser
                        .context_mut()
                        .push_node(TagCategory::CrossReference, reference);
                }
            }
            _ => self.saw_other_content = true,
        }
        parser.context_mut().reset_identifiers();

        if !skip_past(cursor, '}')? {
            return Err(TagFailure::syntax(
                ErrorCode::J0204,
                "unterminated inline tag",
                tag_range,
            ));
        }
        Ok(())
    }

    fn recover(
        &mut self,
        failure: TagFailure,
        tag_range: TextRange,
    ) -> Result<Recovery, JavadocError> {
        match failure {
            TagFailure::Syntax(diagnostic) => {
                warn!(code = %diagnostic.code, "dropping tag: {}", diagnostic.message);
                self.diagnostics
                    .push(diagnostic.with_severity(self.severity));
                Ok(Recovery::Continue)
            }
            TagFailure::Core(error @ JavadocError::StackContractViolation { .. }) => Err(error),
            TagFailure::Core(error) => {
                self.report_error(&error, tag_range);
                if error.is_read_error() {
                    Ok(Recovery::Stop)
                } else {
                    Ok(Recovery::Continue)
                }
            }
        }
    }

    fn report_error(&mut self, error: &JavadocError, range: TextRange) {
        warn!("dropping tag: {error}");
        self.diagnostics
            .push(Diagnostic::from_error(error, range).with_severity(self.severity));
    }
}

impl TagDispatcher for StandardTagScanner {
    fn parse_comment(
        &mut self,
        parser: &mut JavadocParser,
        cursor: &mut CommentCursor<'_>,
        lines: &dyn LineLookup,
    ) -> Result<(), JavadocError> {
        self.severity = parser.options().invalid_tag_severity();
        self.saw_inherit_doc = false;
        self.saw_other_content = false;

        self.scan(parser, cursor, lines)?;

        let inherited = self.saw_inherit_doc && !self.saw_other_content;
        parser.context_mut().set_inherited(inherited);
        Ok(())
    }
}

/// `name` or a type parameter `<T>`.
fn read_parameter_name(
    cursor: &mut CommentCursor<'_>,
) -> Result<Option<CurrentToken>, JavadocError> {
    let start = cursor.offset();
    let mut ahead = *cursor;
    let type_parameter = eat(&mut ahead, '<')?;
    let Some(ident) = read_identifier(&mut ahead)? else {
        return Ok(None);
    };
    let text = if type_parameter {
        if !eat(&mut ahead, '>')? {
            return Ok(None);
        }
        format!("<{}>", ident.text).into()
    } else {
        ident.text
    };
    *cursor = ahead;
    Ok(Some(CurrentToken {
        text,
        range: TextRange::new(start, cursor.offset()),
        raw_end: cursor.offset(),
    }))
}
