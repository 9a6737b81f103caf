//! Full comment parses through the standard tag scanner.

use jdoc::batch::parse_comments;
use jdoc::parser::{ErrorCode, Severity};
use jdoc::syntax::{Reference, TypeReference};
use jdoc::{LineIndex, ProblemSeverity, TextRange, TextSize};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::helpers::comment_fixtures::{
    checking_options, comment_ranges, javadoc_of, parse_checked, parse_checked_in, range_at,
};

// =============================================================================
// Categories and order
// =============================================================================

const MIXED: &str = "/**
 * Resizes the widget.
 * @param first the first
 * @see Other
 * @throws java.io.IOException when it fails
 * @param second
 * @see Widget#Widget(int)
 * @exception IllegalStateException
 */";

#[test]
fn test_interleaved_tags_keep_source_order() {
    let javadoc = javadoc_of(MIXED);

    let params: Vec<&str> = javadoc.parameter_names().collect();
    assert_eq!(params, vec!["first", "second"]);

    let thrown: Vec<String> = javadoc
        .thrown_exceptions
        .iter()
        .map(TypeReference::qualified_name)
        .collect();
    assert_eq!(thrown, vec!["java.io.IOException", "IllegalStateException"]);

    assert_eq!(javadoc.references.len(), 2);
    assert!(matches!(&javadoc.references[0], Reference::Type(t) if t.qualified_name() == "Other"));
    assert!(matches!(&javadoc.references[1], Reference::Constructor(_)));
}

#[test]
fn test_span_matches_comment() {
    let source = "class A {\n  /** @param x */\n  void f(int x) {}\n}";
    let lines = LineIndex::new(source);
    let comments = comment_ranges(source);
    let outcomes = parse_comments(source, &lines, &comments, &checking_options(), Some("A"));

    let javadoc = outcomes[0].as_ref().unwrap().javadoc.as_ref().unwrap();
    assert_eq!(javadoc.source_range(), comments[0]);
    assert_eq!(javadoc.parameters[0].range, range_at(23, "x"));
}

#[test]
fn test_param_ranges() {
    let javadoc = javadoc_of("/** @param count the count */");
    let param = &javadoc.parameters[0];
    assert_eq!(param.token, "count");
    assert_eq!(param.range, range_at(11, "count"));
    assert_eq!(param.tag_range, range_at(4, "@param"));
}

#[test]
fn test_type_parameter_name() {
    let javadoc = javadoc_of("/** @param <T> element type */");
    assert_eq!(javadoc.parameter_names().collect::<Vec<_>>(), vec!["<T>"]);
}

// =============================================================================
// Member references
// =============================================================================

#[rstest]
#[case("/** @see a.b.Foo#Foo(String) */", true)]
#[case("/** @see a.b.Foo#bar() */", false)]
#[case("/** @see Foo#Foo() */", true)]
#[case("/** @see Foo#bar(int) */", false)]
fn test_constructor_or_method(#[case] source: &str, #[case] constructor: bool) {
    let javadoc = javadoc_of(source);
    match &javadoc.references[0] {
        Reference::Constructor(alloc) => {
            assert!(constructor, "unexpected constructor for {source}");
            assert_eq!(alloc.type_ref.last_segment(), Some("Foo"));
        }
        Reference::Method(send) => {
            assert!(!constructor, "unexpected method for {source}");
            assert_eq!(send.selector, "bar");
        }
        other => panic!("unexpected reference {other:?}"),
    }
}

#[test]
fn test_receiver_less_references_use_enclosing_name() {
    let javadoc = javadoc_of("/** @see #size() and {@link #count} or {@link #Widget(int)} */");

    let [method, field, constructor] = &*javadoc.references else {
        panic!("expected three references, got {:?}", javadoc.references);
    };
    let Reference::Method(send) = method else {
        panic!("expected a method, got {method:?}");
    };
    assert_eq!(send.selector, "size");
    assert_eq!(send.receiver.qualified_name(), "Widget");
    assert_eq!(send.arguments.as_deref().map(<[_]>::len), Some(0));

    let Reference::Field(field) = field else {
        panic!("expected a field, got {field:?}");
    };
    assert_eq!(field.token, "count");
    assert_eq!(field.receiver.qualified_name(), "Widget");

    assert!(matches!(constructor, Reference::Constructor(_)));
}

#[test]
fn test_array_arguments() {
    let javadoc =
        javadoc_of("/** @see Widget#resize(int[][] sizes, java.lang.String... names) */");
    let Reference::Method(send) = &javadoc.references[0] else {
        panic!("expected a method reference");
    };
    let arguments = send.arguments.as_deref().unwrap();
    assert_eq!(arguments.len(), 2);

    assert_eq!(arguments[0].name.as_deref(), Some("sizes"));
    match &arguments[0].type_ref {
        TypeReference::ArraySingle {
            reference,
            dimensions,
        } => {
            assert_eq!(reference.token, "int");
            assert_eq!(*dimensions, 2);
        }
        other => panic!("expected int[][], got {other:?}"),
    }

    assert_eq!(arguments[1].name.as_deref(), Some("names"));
    assert!(matches!(
        &arguments[1].type_ref,
        TypeReference::ArrayQualified { dimensions: 1, .. }
    ));
    assert_eq!(arguments[1].type_ref.qualified_name(), "java.lang.String");
}

#[rstest]
#[case("/** @see \"The Book\" */")]
#[case("/** @see <a href=\"https://example.com\">site</a> */")]
fn test_text_references_produce_no_node(#[case] source: &str) {
    let outcome = parse_checked(source);
    assert!(outcome.javadoc.unwrap().references.is_empty());
    assert!(outcome.diagnostics.is_empty());
}

// =============================================================================
// Return and inherited
// =============================================================================

#[test]
fn test_last_return_wins() {
    let source = "/**\n * @return old\n * @return new\n */";
    let javadoc = javadoc_of(source);
    let second = source.rfind("@return").unwrap() as u32;
    assert_eq!(
        javadoc.return_statement.map(|r| r.range),
        Some(range_at(second, "@return"))
    );
}

#[test]
fn test_return_span_covers_escaped_tag_name() {
    let source = r"/** @\u0072eturn the size */";
    let statement = javadoc_of(source).return_statement.unwrap();
    let end = TextSize::of(r"/** @\u0072eturn");

    assert_eq!(statement.range, TextRange::new(TextSize::new(4), end));
    assert_eq!(statement.raw_end, statement.range.end());
}

#[rstest]
#[case("/** {@inheritDoc} */", true)]
#[case("/**\n * {@inheritDoc}\n */", true)]
#[case("/** Adds more. {@inheritDoc} */", false)]
#[case("/** {@inheritDoc}\n * @param x */", false)]
#[case("/** plain */", false)]
fn test_inherited(#[case] source: &str, #[case] inherited: bool) {
    assert_eq!(javadoc_of(source).inherited, inherited);
}

// =============================================================================
// Recovery
// =============================================================================

#[rstest]
#[case("/** @param */", ErrorCode::J0201)]
#[case("/** @throws */", ErrorCode::J0202)]
#[case("/** @see */", ErrorCode::J0203)]
#[case("/** {@link Foo */", ErrorCode::J0204)]
#[case("/** @see Foo# */", ErrorCode::J0301)]
#[case("/** @see Foo#bar(int */", ErrorCode::J0302)]
fn test_malformed_tag_reports(#[case] source: &str, #[case] code: ErrorCode) {
    let outcome = parse_checked(source);
    let codes: Vec<ErrorCode> = outcome.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![code]);
    assert_eq!(outcome.diagnostics[0].severity, Severity::Warning);
}

#[test]
fn test_bad_tag_does_not_stop_the_scan() {
    let source = "/**\n * @param\n * @see\n * @param ok\n */";
    let outcome = parse_checked(source);
    let javadoc = outcome.javadoc.unwrap();
    assert_eq!(javadoc.parameter_names().collect::<Vec<_>>(), vec!["ok"]);

    let lines = LineIndex::new(source);
    let located: Vec<(ErrorCode, usize)> = outcome
        .diagnostics
        .iter()
        .map(|d| (d.code, lines.span(d.range).start.line))
        .collect();
    assert_eq!(located, vec![(ErrorCode::J0201, 1), (ErrorCode::J0203, 2)]);
}

#[test]
fn test_missing_enclosing_name_drops_one_reference() {
    let outcome = parse_checked_in("/** @see #size()\n * @see Other */", None);
    let javadoc = outcome.javadoc.unwrap();

    assert_eq!(javadoc.references.len(), 1);
    assert_eq!(javadoc.references[0].receiver().qualified_name(), "Other");
    assert_eq!(outcome.diagnostics.len(), 1);
    let diagnostic = &outcome.diagnostics[0];
    assert_eq!(diagnostic.code, ErrorCode::J0303);
    assert_eq!(diagnostic.range, range_at(4, "@see"));
    assert!(diagnostic.has_hint());
}

#[test]
fn test_malformed_escape_keeps_what_was_built() {
    let source = r"/** @param a \u00zz @param b */";
    let outcome = parse_checked(source);

    let javadoc = outcome.javadoc.unwrap();
    assert_eq!(javadoc.parameter_names().collect::<Vec<_>>(), vec!["a"]);
    assert_eq!(outcome.diagnostics[0].code, ErrorCode::J0101);
    assert_eq!(
        outcome.diagnostics[0].range.start(),
        TextSize::new(13)
    );
}

#[test]
fn test_error_severity_follows_options() {
    let source = "/** @param */";
    let lines = LineIndex::new(source);
    let options = checking_options().with_invalid_javadoc(ProblemSeverity::Error);
    let outcomes = parse_comments(source, &lines, &comment_ranges(source), &options, None);
    let outcome = outcomes[0].as_ref().unwrap();
    assert_eq!(outcome.diagnostics[0].severity, Severity::Error);
}
