//! `@see` / `{@link}` reference syntax:
//! `[Qualified.Type][#member[(ArgType[] name, ...)]]`.

use text_size::TextRange;

use super::TagFailure;
use super::lexing::{
    eat, is_identifier_start, peek, read_dimensions, read_identifier, skip_past, skip_spaces,
};
use crate::parser::{CommentCursor, ErrorCode, JavadocParser};
use crate::syntax::{Argument, Reference};

/// Parse a reference. `Ok(None)` for the string and HTML forms, which
/// produce no node.
pub(super) fn parse_reference(
    parser: &mut JavadocParser,
    cursor: &mut CommentCursor<'_>,
) -> Result<Option<Reference>, TagFailure> {
    skip_spaces(cursor)?;
    let start = cursor.offset();
    match peek(cursor)? {
        Some('"') => {
            cursor.read_char()?;
            skip_past(cursor, '"')?;
            return Ok(None);
        }
        Some('<') => return Ok(None),
        _ => {}
    }

    push_qualified_name(parser, cursor)?;
    let receiver = parser.build_type_reference()?;

    if !eat(cursor, '#')? {
        return match receiver {
            Some(type_ref) => Ok(Some(Reference::Type(type_ref))),
            None => Err(TagFailure::syntax(
                ErrorCode::J0203,
                "missing reference",
                TextRange::empty(start),
            )),
        };
    }

    let member = read_identifier(cursor)?.ok_or_else(|| {
        TagFailure::syntax(
            ErrorCode::J0301,
            "expected a member name after `#`",
            TextRange::new(start, cursor.offset()),
        )
    })?;
    parser
        .context_mut()
        .push_identifier(member.text, member.range);

    if eat(cursor, '(')? {
        let arguments = parse_arguments(parser, cursor)?;
        Ok(Some(parser.build_method_reference(receiver, Some(arguments))?))
    } else {
        Ok(Some(Reference::Field(
            parser.build_field_reference(receiver)?,
        )))
    }
}

/// Push every segment of a dotted name plus its length, which may be 0.
pub(super) fn push_qualified_name(
    parser: &mut JavadocParser,
    cursor: &mut CommentCursor<'_>,
) -> Result<usize, TagFailure> {
    let mut length = 0;
    while let Some(segment) = read_identifier(cursor)? {
        parser
            .context_mut()
            .push_identifier(segment.text, segment.range);
        length += 1;

        let mut ahead = *cursor;
        let continues = eat(&mut ahead, '.')?
            && peek(&ahead)?.is_some_and(is_identifier_start);
        if !continues {
            break;
        }
        *cursor = ahead;
    }
    parser.context_mut().push_identifier_length(length);
    Ok(length)
}

/// Arguments after the opening `(`, up to and including `)`.
fn parse_arguments(
    parser: &mut JavadocParser,
    cursor: &mut CommentCursor<'_>,
) -> Result<Vec<Argument>, TagFailure> {
    let open = cursor.offset();
    let mut arguments = Vec::new();
    let unclosed = |cursor: &CommentCursor<'_>| {
        TagFailure::syntax(
            ErrorCode::J0302,
            "unclosed argument list",
            TextRange::new(open, cursor.offset()),
        )
    };

    skip_spaces(cursor)?;
    if eat(cursor, ')')? {
        return Ok(arguments);
    }

    loop {
        skip_spaces(cursor)?;
        let type_start = cursor.offset();
        push_qualified_name(parser, cursor)?;
        let type_ref = parser.build_type_reference()?.ok_or_else(|| {
            TagFailure::syntax(
                ErrorCode::J0301,
                "expected an argument type",
                TextRange::empty(type_start),
            )
        })?;
        let dimensions = read_dimensions(cursor)?;

        skip_spaces(cursor)?;
        let name = read_identifier(cursor)?.map(|ident| ident.text);
        arguments.push(parser.build_argument(name, dimensions, type_ref, cursor.offset()));

        skip_spaces(cursor)?;
        if !cursor.has_more_on_line() {
            return Err(unclosed(cursor));
        }
        match cursor.read_char()? {
            ',' => continue,
            ')' => return Ok(arguments),
            _ => return Err(unclosed(cursor)),
        }
    }
}
