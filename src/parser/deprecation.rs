//! Fast `@deprecated` detection without building an AST.

use text_size::{TextRange, TextSize};
use tracing::warn;

use super::errors::JavadocError;
use super::reader::{COMMENT_OPENER_LEN, CommentCursor, is_java_whitespace};
use crate::base::LineLookup;

const DEPRECATED: &str = "deprecated";

/// Scan the comment line by line for `@deprecated`.
///
/// The token must follow `@` directly and be ended by whitespace or `*`.
/// A failed partial match resumes after the last character it consumed, so
/// `@@deprecated` is not recognized.
///
/// A reader error ends the usable input: the scan stops there and reports
/// what it found before it.
pub(crate) fn scan_for_deprecated(
    cursor: &mut CommentCursor<'_>,
    lines: &dyn LineLookup,
    comment: TextRange,
) -> Result<bool, JavadocError> {
    match scan_lines(cursor, lines, comment) {
        Err(error) if error.is_read_error() => {
            warn!("deprecation scan stopped early: {error}");
            Ok(false)
        }
        result => result,
    }
}

fn scan_lines(
    cursor: &mut CommentCursor<'_>,
    lines: &dyn LineLookup,
    comment: TextRange,
) -> Result<bool, JavadocError> {
    let first_line = lines.line_number(comment.start());
    let last_line = lines.line_number(last_char(comment));

    for line in first_line..=last_line {
        let line_start = if line == first_line {
            u32::from(comment.start()) as usize + COMMENT_OPENER_LEN
        } else {
            u32::from(lines.line_start(line)) as usize
        };
        let line_end = if line == last_line {
            cursor.end_comment()
        } else {
            u32::from(lines.line_end(line)) as usize
        };
        cursor.set_index(line_start);
        cursor.set_line_end(line_end);

        while cursor.has_more_on_line() {
            if cursor.read_char()? == '@' && matches_token(cursor)? {
                let next = cursor.read_char()?;
                if is_java_whitespace(next) || next == '*' {
                    return Ok(true);
                }
            }
        }
    }
    Ok(false)
}

/// Consume characters while they spell out `deprecated`.
fn matches_token(cursor: &mut CommentCursor<'_>) -> Result<bool, JavadocError> {
    for expected in DEPRECATED.chars() {
        if cursor.read_char()? != expected {
            return Ok(false);
        }
    }
    Ok(true)
}

fn last_char(comment: TextRange) -> TextSize {
    if comment.is_empty() {
        comment.start()
    } else {
        comment.end() - TextSize::new(1)
    }
}
