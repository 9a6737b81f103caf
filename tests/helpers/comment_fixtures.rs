//! Comment sources and parse shortcuts shared by the parser tests.

use jdoc::batch::{CommentOutcome, parse_comment};
use jdoc::{Javadoc, JavadocOptions, LineIndex, ProblemSeverity, TextRange, TextSize};

/// Range covering all of `source`, for sources that are a single comment.
pub fn whole(source: &str) -> TextRange {
    TextRange::up_to(TextSize::of(source))
}

/// Ranges of every `/** ... */` in `source`.
pub fn comment_ranges(source: &str) -> Vec<TextRange> {
    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(found) = source[from..].find("/**") {
        let start = from + found;
        let Some(close) = source[start + 3..].find("*/") else {
            break;
        };
        let end = start + 3 + close + 2;
        ranges.push(TextRange::new(
            TextSize::new(start as u32),
            TextSize::new(end as u32),
        ));
        from = end;
    }
    ranges
}

/// Options with full tag parsing turned on.
pub fn checking_options() -> JavadocOptions {
    JavadocOptions::new().with_invalid_javadoc(ProblemSeverity::Warning)
}

/// Parse a source that is exactly one comment, with checking on.
pub fn parse_checked(source: &str) -> CommentOutcome {
    parse_checked_in(source, Some("Widget"))
}

pub fn parse_checked_in(source: &str, enclosing: Option<&str>) -> CommentOutcome {
    let lines = LineIndex::new(source);
    parse_comment(source, &lines, whole(source), &checking_options(), enclosing)
        .unwrap_or_else(|error| panic!("parse failed for {source:?}: {error}"))
}

/// The finalized node of a checked parse.
pub fn javadoc_of(source: &str) -> Javadoc {
    parse_checked(source)
        .javadoc
        .unwrap_or_else(|| panic!("no javadoc for {source:?}"))
}

/// `text` at `offset`, as a range.
pub fn range_at(offset: u32, text: &str) -> TextRange {
    TextRange::at(TextSize::new(offset), TextSize::of(text))
}
