//! `@deprecated` detection, on the fast scan and through a full parse.

use jdoc::parser::{JavadocParser, ParseState};
use jdoc::tags::StandardTagScanner;
use jdoc::{JavadocOptions, LineIndex, ProblemSeverity};
use rstest::rstest;

use crate::helpers::comment_fixtures::{checking_options, whole};

fn is_deprecated(source: &str, options: JavadocOptions) -> bool {
    let lines = LineIndex::new(source);
    let mut parser = JavadocParser::new(options);
    let mut scanner = StandardTagScanner::new();
    parser
        .check_deprecation(source, &lines, whole(source), &mut scanner)
        .unwrap_or_else(|error| panic!("scan failed for {source:?}: {error}"))
}

#[rstest]
#[case("/** @deprecated */", true)]
#[case("/** @deprecated\n */", true)]
#[case("/** @deprecatedFoo */", false)]
#[case("/** see @deprecated below */", true)]
#[case("/** nothing to see here */", false)]
#[case("/**\n * Old.\n * @deprecated use {@link Other}\n */", true)]
#[case("/**\r\n * @deprecated\r\n */", true)]
#[case("/** @deprecated*/", true)]
#[case("/** @Deprecated */", false)]
#[case("/** @@deprecated */", false)]
#[case("/** \\u0040deprecated */", true)]
#[case("/** @depre\ncated */", false)]
fn test_fast_scan(#[case] source: &str, #[case] expected: bool) {
    assert_eq!(is_deprecated(source, JavadocOptions::default()), expected);
}

#[rstest]
#[case("/** @deprecated */", true)]
#[case("/**\n * @deprecated since 2.0\n */", true)]
#[case("/** @deprecatedFoo */", false)]
#[case("/** nothing to see here */", false)]
fn test_full_parse(#[case] source: &str, #[case] expected: bool) {
    assert_eq!(is_deprecated(source, checking_options()), expected);
}

#[test]
fn test_full_parse_requires_tag_at_line_start() {
    let source = "/** see @deprecated below */";
    assert!(!is_deprecated(source, checking_options()));
}

#[test]
fn test_fast_scan_creates_node_only_when_needed() {
    let source = "/** @deprecated */";
    let lines = LineIndex::new(source);
    let mut scanner = StandardTagScanner::new();

    let mut parser = JavadocParser::default();
    assert!(
        parser
            .check_deprecation(source, &lines, whole(source), &mut scanner)
            .unwrap()
    );
    assert!(parser.javadoc().is_none());
    assert_eq!(parser.state(), ParseState::Finalized);

    let options =
        JavadocOptions::new().with_missing_javadoc_comments(ProblemSeverity::Warning);
    let mut parser = JavadocParser::new(options);
    parser
        .check_deprecation(source, &lines, whole(source), &mut scanner)
        .unwrap();
    let javadoc = parser.javadoc().expect("node for missing-comment checks");
    assert_eq!(javadoc.source_range(), whole(source));
    assert!(javadoc.is_empty());
}

#[rstest]
#[case(JavadocOptions::default())]
#[case(checking_options())]
fn test_malformed_escape_is_end_of_input(#[case] options: JavadocOptions) {
    let source = "/** see C:\\users\\me\n * @deprecated\n */";
    assert!(!is_deprecated(source, options));
}

#[test]
fn test_malformed_escape_keeps_node_for_missing_comment_checks() {
    let source = r"/** \u00zz */";
    let lines = LineIndex::new(source);
    let options =
        JavadocOptions::new().with_missing_javadoc_comments(ProblemSeverity::Warning);
    let mut parser = JavadocParser::new(options);

    let result =
        parser.check_deprecation(source, &lines, whole(source), &mut StandardTagScanner::new());

    assert_eq!(result, Ok(false));
    assert_eq!(
        parser.take_javadoc().map(|javadoc| javadoc.source_range()),
        Some(whole(source))
    );
}

#[rstest]
#[case("/** @deprecated\u{a0}x */", false)]
#[case("/** @deprecated\u{202f}x */", false)]
#[case("/** @deprecated\u{3000}x */", true)]
#[case("/** @deprecated\u{1f}x */", true)]
fn test_token_terminator_follows_java_whitespace(#[case] source: &str, #[case] expected: bool) {
    assert_eq!(is_deprecated(source, JavadocOptions::default()), expected);
}
