//! Property tests: order preservation and exact sizing across categories.

use jdoc::syntax::TypeReference;
use proptest::prelude::*;

use crate::helpers::comment_fixtures::{javadoc_of, parse_checked};

#[derive(Debug, Clone)]
enum Tag {
    See(String),
    Throws(String),
    Param(String),
}

impl Tag {
    fn line(&self) -> String {
        match self {
            Tag::See(name) => format!(" * @see {name}\n"),
            Tag::Throws(name) => format!(" * @throws {name} sometimes\n"),
            Tag::Param(name) => format!(" * @param {name} the value\n"),
        }
    }
}

fn identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,8}"
}

fn qualified() -> impl Strategy<Value = String> {
    prop::collection::vec(identifier(), 1..4).prop_map(|segments| segments.join("."))
}

fn tag() -> impl Strategy<Value = Tag> {
    prop_oneof![
        qualified().prop_map(Tag::See),
        qualified().prop_map(Tag::Throws),
        identifier().prop_map(Tag::Param),
    ]
}

fn comment(tags: &[Tag]) -> String {
    let mut source = String::from("/**\n * Summary.\n");
    for tag in tags {
        source.push_str(&tag.line());
    }
    source.push_str(" */");
    source
}

proptest! {
    #[test]
    fn categories_keep_their_subsequence(tags in prop::collection::vec(tag(), 0..24)) {
        let javadoc = javadoc_of(&comment(&tags));

        let expected_refs: Vec<&str> = tags
            .iter()
            .filter_map(|t| if let Tag::See(n) = t { Some(n.as_str()) } else { None })
            .collect();
        let expected_thrown: Vec<&str> = tags
            .iter()
            .filter_map(|t| if let Tag::Throws(n) = t { Some(n.as_str()) } else { None })
            .collect();
        let expected_params: Vec<&str> = tags
            .iter()
            .filter_map(|t| if let Tag::Param(n) = t { Some(n.as_str()) } else { None })
            .collect();

        let refs: Vec<String> = javadoc
            .references
            .iter()
            .map(|r| r.receiver().qualified_name())
            .collect();
        let thrown: Vec<String> = javadoc
            .thrown_exceptions
            .iter()
            .map(TypeReference::qualified_name)
            .collect();
        let params: Vec<&str> = javadoc.parameter_names().collect();

        prop_assert_eq!(refs, expected_refs);
        prop_assert_eq!(thrown, expected_thrown);
        prop_assert_eq!(params, expected_params);
    }

    #[test]
    fn span_is_the_comment_span(tags in prop::collection::vec(tag(), 0..8)) {
        let source = comment(&tags);
        let outcome = parse_checked(&source);
        let javadoc = outcome.javadoc.unwrap();
        prop_assert_eq!(u32::from(javadoc.source_start()), 0);
        prop_assert_eq!(u32::from(javadoc.source_end()) as usize, source.len());
        prop_assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn plain_text_is_never_deprecated(text in "[a-zA-Z0-9 .,\n]{0,80}") {
        let source = format!("/** {text} */");
        prop_assert!(!parse_checked(&source).deprecated);
    }
}
