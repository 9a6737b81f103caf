//! Line number and line boundary queries over a source buffer.

use text_size::{TextRange, TextSize};

use super::{Position, Span};

/// The line/position service the comment parser consumes.
///
/// Lines are 0-indexed. `line_end` is the offset of the line terminator
/// (`\n`, or the `\r` of a `\r\n` pair), or the text length for the last line.
pub trait LineLookup {
    /// Line containing `offset`. Offsets past the end map to the last line.
    fn line_number(&self, offset: TextSize) -> usize;
    /// Offset of the first character of `line`.
    fn line_start(&self, line: usize) -> TextSize;
    /// Offset of the terminator of `line`.
    fn line_end(&self, line: usize) -> TextSize;
}

/// Line table computed once from a source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Start offset of every line, `line_starts[0] == 0`
    line_starts: Vec<TextSize>,
    /// Terminator offset of every line
    line_ends: Vec<TextSize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        let mut line_ends = Vec::new();
        let bytes = text.as_bytes();

        for (i, &b) in bytes.iter().enumerate() {
            if b == b'\n' {
                let end = if i > 0 && bytes[i - 1] == b'\r' { i - 1 } else { i };
                line_ends.push(TextSize::new(end as u32));
                line_starts.push(TextSize::new(i as u32 + 1));
            }
        }
        line_ends.push(TextSize::of(text));

        Self {
            line_starts,
            line_ends,
        }
    }

    /// Number of lines, counting a trailing empty line after a final newline.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset into a 0-indexed line/column position.
    pub fn line_col(&self, offset: TextSize) -> Position {
        let line = self.line_number(offset);
        let column = offset - self.line_starts[line];
        Position::new(line, u32::from(column) as usize)
    }

    /// Line/column span of a byte range.
    pub fn span(&self, range: TextRange) -> Span {
        Span::new(self.line_col(range.start()), self.line_col(range.end()))
    }
}

impl LineLookup for LineIndex {
    fn line_number(&self, offset: TextSize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        }
    }

    fn line_start(&self, line: usize) -> TextSize {
        let line = line.min(self.line_starts.len() - 1);
        self.line_starts[line]
    }

    fn line_end(&self, line: usize) -> TextSize {
        let line = line.min(self.line_ends.len() - 1);
        self.line_ends[line]
    }
}
