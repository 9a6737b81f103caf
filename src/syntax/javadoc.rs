//! The finished Javadoc node.

use text_size::{TextRange, TextSize};

use super::{Reference, ReturnStatement, SingleNameReference, TypeReference};

/// Structured form of one documentation comment.
///
/// The span is fixed at creation. Everything else is written once by the
/// finalizer, after which the node is handed to the owning declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Javadoc {
    range: TextRange,
    /// `@see` and `{@link}` targets, in source order
    pub references: Box<[Reference]>,
    /// `@throws` / `@exception` types, in source order
    pub thrown_exceptions: Box<[TypeReference]>,
    /// `@param` names, in source order
    pub parameters: Box<[SingleNameReference]>,
    pub return_statement: Option<ReturnStatement>,
    /// Comment is nothing but `{@inheritDoc}`
    pub inherited: bool,
}

impl Javadoc {
    pub fn new(range: TextRange) -> Self {
        Self {
            range,
            references: Box::default(),
            thrown_exceptions: Box::default(),
            parameters: Box::default(),
            return_statement: None,
            inherited: false,
        }
    }

    pub fn source_range(&self) -> TextRange {
        self.range
    }

    pub fn source_start(&self) -> TextSize {
        self.range.start()
    }

    pub fn source_end(&self) -> TextSize {
        self.range.end()
    }

    /// Parameter names, for matching against a method signature.
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.parameters.iter().map(|param| param.token.as_str())
    }

    /// No tag produced anything.
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
            && self.thrown_exceptions.is_empty()
            && self.parameters.is_empty()
            && self.return_statement.is_none()
            && !self.inherited
    }
}
