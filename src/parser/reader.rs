//! Character reader over a comment body.
//!
//! Reads logical characters, decoding `\uXXXX` escapes the way the Java
//! lexer does, and keeps track of the line the cursor is on.

use text_size::{TextRange, TextSize};

use super::errors::JavadocError;
use crate::base::LineLookup;

/// Length of the opening `/**`
pub const COMMENT_OPENER_LEN: usize = 3;
/// Length of the closing `*/`
pub const COMMENT_CLOSER_LEN: usize = 2;

/// Whitespace as the Java lexer and `Character.isWhitespace` see it: no
/// non-breaking spaces, plus the four information separators.
pub fn is_java_whitespace(c: char) -> bool {
    match c {
        '\u{1c}'..='\u{1f}' => true,
        '\u{a0}' | '\u{2007}' | '\u{202f}' | '\u{85}' => false,
        c => c.is_whitespace(),
    }
}

fn offset(index: usize) -> TextSize {
    TextSize::new(index as u32)
}

/// Cursor over one documentation comment.
///
/// Borrows the source for the duration of one scan; nothing outlives the call
/// that created it.
#[derive(Debug, Clone, Copy)]
pub struct CommentCursor<'a> {
    source: &'a str,
    /// Hard boundary: the end of the comment
    limit: usize,
    index: usize,
    /// Start of the closing `*/`
    end_comment: usize,
    /// Exclusive end of the current line
    line_end: usize,
    line_ptr: usize,
    last_line_ptr: usize,
    line_started: bool,
    /// Previous character was a raw backslash that could pair with this one
    after_backslash: bool,
}

impl<'a> CommentCursor<'a> {
    /// Cursor positioned right after the opening `/**`.
    ///
    /// `comment` must cover the whole comment, delimiters included, and lie on
    /// character boundaries of `source`.
    pub fn new(source: &'a str, comment: TextRange) -> Self {
        let start = u32::from(comment.start()) as usize;
        let limit = (u32::from(comment.end()) as usize).min(source.len());
        let index = (start + COMMENT_OPENER_LEN).min(limit);
        let end_comment = limit.saturating_sub(COMMENT_CLOSER_LEN).max(index);
        Self {
            source,
            limit,
            index,
            end_comment,
            line_end: end_comment,
            line_ptr: 0,
            last_line_ptr: 0,
            line_started: false,
            after_backslash: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn offset(&self) -> TextSize {
        offset(self.index)
    }

    /// Move to `index`. Backslash pairing does not carry across a jump.
    pub fn set_index(&mut self, index: usize) {
        self.index = index.min(self.limit);
        self.after_backslash = false;
    }

    pub fn line_end(&self) -> usize {
        self.line_end
    }

    pub fn set_line_end(&mut self, line_end: usize) {
        self.line_end = line_end.min(self.end_comment);
    }

    pub fn end_comment(&self) -> usize {
        self.end_comment
    }

    pub fn line_started(&self) -> bool {
        self.line_started
    }

    pub fn set_line_started(&mut self, started: bool) {
        self.line_started = started;
    }

    /// Characters remain before the end of the current line.
    pub fn has_more_on_line(&self) -> bool {
        self.index < self.line_end
    }

    /// Characters remain before the closing `*/`.
    pub fn has_more(&self) -> bool {
        self.index < self.end_comment
    }

    /// Raw source text between two offsets.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        self.source.get(start..end).unwrap_or_default()
    }

    /// Read one logical character and advance past it.
    pub fn read_char(&mut self) -> Result<char, JavadocError> {
        let start = self.index;
        let c = self
            .source
            .get(start..self.limit)
            .and_then(|rest| rest.chars().next())
            .ok_or(JavadocError::ReadPastEnd {
                offset: offset(start),
            })?;
        self.index += c.len_utf8();

        if c != '\\' {
            self.after_backslash = false;
            return Ok(c);
        }
        // `\\u0041` is a backslash followed by text, not an escape
        if self.after_backslash || self.byte_at(self.index) != Some(b'u') {
            self.after_backslash = !self.after_backslash;
            return Ok('\\');
        }

        while self.byte_at(self.index) == Some(b'u') {
            self.index += 1;
        }
        let malformed = JavadocError::MalformedEscape {
            offset: offset(start),
        };
        let mut value = 0u32;
        for _ in 0..4 {
            let digit = self
                .byte_at(self.index)
                .and_then(|b| char::from(b).to_digit(16))
                .ok_or_else(|| malformed.clone())?;
            value = value * 16 + digit;
            self.index += 1;
        }
        self.after_backslash = false;
        char::from_u32(value).ok_or(malformed)
    }

    /// Next logical character without consuming it.
    pub fn peek_char(&self) -> Result<char, JavadocError> {
        let mut ahead = *self;
        ahead.read_char()
    }

    fn byte_at(&self, index: usize) -> Option<u8> {
        if index < self.limit {
            self.source.as_bytes().get(index).copied()
        } else {
            None
        }
    }

    /// Set up line tracking for a full scan of the comment.
    pub fn init_line_end(&mut self, lines: &dyn LineLookup) {
        let start = self.index.saturating_sub(COMMENT_OPENER_LEN);
        self.line_ptr = lines.line_number(offset(start));
        self.last_line_ptr = lines.line_number(offset(self.limit.saturating_sub(1)));
        self.line_end = if self.line_ptr == self.last_line_ptr {
            self.end_comment
        } else {
            (u32::from(lines.line_end(self.line_ptr)) as usize).min(self.end_comment)
        };
        self.line_started = false;
    }

    /// Follow the cursor onto the next line(s) once it moved past the current
    /// line end. The last line always ends at the closing `*/`.
    pub fn update_line_end(&mut self, lines: &dyn LineLookup) {
        while self.index > self.line_end {
            if self.line_ptr >= self.last_line_ptr {
                self.line_end = self.end_comment;
                return;
            }
            self.line_ptr += 1;
            self.line_end = if self.line_ptr == self.last_line_ptr {
                self.end_comment
            } else {
                (u32::from(lines.line_end(self.line_ptr)) as usize).min(self.end_comment)
            };
            self.line_started = false;
        }
    }
}
