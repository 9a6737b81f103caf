//! Small lexing helpers over a [`CommentCursor`].

use smol_str::SmolStr;
use text_size::TextRange;

use crate::parser::{CommentCursor, JavadocError};

/// An identifier read from the comment, escapes decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Identifier {
    pub text: SmolStr,
    pub range: TextRange,
}

pub(crate) fn is_identifier_start(c: char) -> bool {
    unicode_ident::is_xid_start(c) || c == '_' || c == '$'
}

pub(crate) fn is_identifier_part(c: char) -> bool {
    unicode_ident::is_xid_continue(c) || c == '$'
}

/// Next character before the closing `*/`, not consumed.
pub(crate) fn peek(cursor: &CommentCursor<'_>) -> Result<Option<char>, JavadocError> {
    if cursor.has_more() {
        cursor.peek_char().map(Some)
    } else {
        Ok(None)
    }
}

/// Consume `expected` if it is next.
pub(crate) fn eat(cursor: &mut CommentCursor<'_>, expected: char) -> Result<bool, JavadocError> {
    if peek(cursor)? == Some(expected) {
        cursor.read_char()?;
        return Ok(true);
    }
    Ok(false)
}

/// Skip blanks without leaving the current line.
pub(crate) fn skip_spaces(cursor: &mut CommentCursor<'_>) -> Result<(), JavadocError> {
    while cursor.has_more_on_line() {
        match cursor.peek_char()? {
            ' ' | '\t' | '\u{c}' => {
                cursor.read_char()?;
            }
            _ => break,
        }
    }
    Ok(())
}

pub(crate) fn read_identifier(
    cursor: &mut CommentCursor<'_>,
) -> Result<Option<Identifier>, JavadocError> {
    let start = cursor.offset();
    match peek(cursor)? {
        Some(c) if is_identifier_start(c) => {}
        _ => return Ok(None),
    }
    let mut text = String::new();
    while let Some(c) = peek(cursor)? {
        if !is_identifier_part(c) {
            break;
        }
        cursor.read_char()?;
        text.push(c);
    }
    Ok(Some(Identifier {
        text: text.into(),
        range: TextRange::new(start, cursor.offset()),
    }))
}

/// Count `[]` pairs and a trailing `...`.
pub(crate) fn read_dimensions(cursor: &mut CommentCursor<'_>) -> Result<u32, JavadocError> {
    let mut dimensions = 0;
    loop {
        let mut ahead = *cursor;
        if eat(&mut ahead, '[')? && eat(&mut ahead, ']')? {
            *cursor = ahead;
            dimensions += 1;
            continue;
        }
        let mut ahead = *cursor;
        if eat(&mut ahead, '.')? && eat(&mut ahead, '.')? && eat(&mut ahead, '.')? {
            *cursor = ahead;
            dimensions += 1;
        }
        return Ok(dimensions);
    }
}

/// Consume up to and including `terminator`. Returns false when the comment
/// ended first.
pub(crate) fn skip_past(
    cursor: &mut CommentCursor<'_>,
    terminator: char,
) -> Result<bool, JavadocError> {
    while cursor.has_more() {
        if cursor.read_char()? == terminator {
            return Ok(true);
        }
    }
    Ok(false)
}
