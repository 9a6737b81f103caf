//! Parse state shared by the tag dispatcher and the construction bridge.
//!
//! One `ParseContext` per comment, owned by the parser and lent to the
//! dispatcher through `&mut`. The dispatcher pushes raw lexical material
//! (identifiers, their spans, qualified-name lengths); construction
//! operations consume it and deposit finished nodes as tagged groups.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use super::errors::JavadocError;
use crate::syntax::{
    AllocationExpression, FieldReference, MessageSend, Reference, ReturnStatement,
    SingleNameReference, TypeReference,
};

/// Output collection a group of nodes is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagCategory {
    /// `@see`, `{@link}`
    CrossReference,
    /// `@throws`, `@exception`
    ThrownType,
    /// `@param`
    Parameter,
}

impl TagCategory {
    pub const ALL: [TagCategory; 3] = [Self::CrossReference, Self::ThrownType, Self::Parameter];

    pub fn index(self) -> usize {
        match self {
            Self::CrossReference => 0,
            Self::ThrownType => 1,
            Self::Parameter => 2,
        }
    }
}

/// A finished node waiting on the AST stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocNode {
    Type(TypeReference),
    Field(FieldReference),
    Method(MessageSend),
    Constructor(AllocationExpression),
    Name(SingleNameReference),
}

impl DocNode {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Type(_) => "type reference",
            Self::Field(_) => "field reference",
            Self::Method(_) => "message send",
            Self::Constructor(_) => "allocation expression",
            Self::Name(_) => "single name reference",
        }
    }

    pub fn into_reference(self) -> Result<Reference, Self> {
        match self {
            Self::Type(type_ref) => Ok(Reference::Type(type_ref)),
            Self::Field(field) => Ok(Reference::Field(field)),
            Self::Method(send) => Ok(Reference::Method(send)),
            Self::Constructor(alloc) => Ok(Reference::Constructor(alloc)),
            Self::Name(_) => Err(self),
        }
    }

    pub fn into_type(self) -> Result<TypeReference, Self> {
        match self {
            Self::Type(type_ref) => Ok(type_ref),
            other => Err(other),
        }
    }

    pub fn into_name(self) -> Result<SingleNameReference, Self> {
        match self {
            Self::Name(name) => Ok(name),
            other => Err(other),
        }
    }
}

impl From<Reference> for DocNode {
    fn from(reference: Reference) -> Self {
        match reference {
            Reference::Type(type_ref) => Self::Type(type_ref),
            Reference::Field(field) => Self::Field(field),
            Reference::Method(send) => Self::Method(send),
            Reference::Constructor(alloc) => Self::Constructor(alloc),
        }
    }
}

impl From<TypeReference> for DocNode {
    fn from(type_ref: TypeReference) -> Self {
        Self::Type(type_ref)
    }
}

impl From<SingleNameReference> for DocNode {
    fn from(name: SingleNameReference) -> Self {
        Self::Name(name)
    }
}

/// One tag occurrence's worth of nodes on the AST stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AstGroup {
    pub category: TagCategory,
    pub count: usize,
}

/// The token the dispatcher last recognized.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CurrentToken {
    /// Decoded identifier text
    pub text: SmolStr,
    pub range: TextRange,
    /// End of the token in the raw source; same as `range.end()`
    pub raw_end: TextSize,
}

#[derive(Debug, Default)]
pub struct ParseContext {
    identifiers: Vec<SmolStr>,
    identifier_positions: Vec<TextRange>,
    identifier_lengths: Vec<usize>,
    nodes: Vec<DocNode>,
    groups: Vec<AstGroup>,
    tag_range: TextRange,
    current_token: CurrentToken,
    pub(crate) inherited: bool,
    pub(crate) deprecated: bool,
    pub(crate) return_statement: Option<ReturnStatement>,
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Identifier stacks
    // ------------------------------------------------------------------

    /// Push one name token and its span.
    pub fn push_identifier(&mut self, name: impl Into<SmolStr>, range: TextRange) {
        self.identifiers.push(name.into());
        self.identifier_positions.push(range);
    }

    /// Record that the last `length` identifiers form one qualified name.
    pub fn push_identifier_length(&mut self, length: usize) {
        self.identifier_lengths.push(length);
    }

    /// Push a dotted name: every segment plus the length record.
    pub fn push_qualified_name<S: Into<SmolStr>>(
        &mut self,
        segments: impl IntoIterator<Item = (S, TextRange)>,
    ) {
        let mut length = 0;
        for (name, range) in segments {
            self.push_identifier(name, range);
            length += 1;
        }
        self.push_identifier_length(length);
    }

    pub fn identifier_depth(&self) -> usize {
        self.identifiers.len()
    }

    pub(crate) fn pop_identifier_length(
        &mut self,
        operation: &'static str,
    ) -> Result<usize, JavadocError> {
        self.identifier_lengths
            .pop()
            .ok_or_else(|| JavadocError::contract(operation, "identifier length stack is empty"))
    }

    /// Remove the top `count` identifiers, returned in source order.
    pub(crate) fn pop_identifiers(
        &mut self,
        count: usize,
        operation: &'static str,
    ) -> Result<(Vec<SmolStr>, Vec<TextRange>), JavadocError> {
        let depth = self.identifiers.len();
        if count > depth || self.identifier_positions.len() != depth {
            return Err(JavadocError::contract(
                operation,
                format!("need {count} identifiers, stack holds {depth}"),
            ));
        }
        let names = self.identifiers.split_off(depth - count);
        let positions = self.identifier_positions.split_off(depth - count);
        Ok((names, positions))
    }

    /// Leading identifier: the member name of a reference.
    pub(crate) fn leading_identifier(
        &self,
        operation: &'static str,
    ) -> Result<(SmolStr, TextRange), JavadocError> {
        match (self.identifiers.first(), self.identifier_positions.first()) {
            (Some(name), Some(range)) => Ok((name.clone(), *range)),
            _ => Err(JavadocError::contract(operation, "no member name on the identifier stack")),
        }
    }

    /// Forget all raw identifiers, between tags.
    pub fn reset_identifiers(&mut self) {
        self.identifiers.clear();
        self.identifier_positions.clear();
        self.identifier_lengths.clear();
    }

    // ------------------------------------------------------------------
    // Tag and token positions
    // ------------------------------------------------------------------

    pub fn set_tag_range(&mut self, range: TextRange) {
        self.tag_range = range;
    }

    pub fn tag_range(&self) -> TextRange {
        self.tag_range
    }

    pub fn set_current_token(&mut self, token: CurrentToken) {
        self.current_token = token;
    }

    pub fn current_token(&self) -> &CurrentToken {
        &self.current_token
    }

    // ------------------------------------------------------------------
    // Flags
    // ------------------------------------------------------------------

    pub fn set_inherited(&mut self, inherited: bool) {
        self.inherited = inherited;
    }

    pub fn set_deprecated(&mut self, deprecated: bool) {
        self.deprecated = deprecated;
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    // ------------------------------------------------------------------
    // AST stack
    // ------------------------------------------------------------------

    /// Deposit one finished node as its own group.
    pub fn push_node(&mut self, category: TagCategory, node: impl Into<DocNode>) {
        self.nodes.push(node.into());
        self.groups.push(AstGroup { category, count: 1 });
    }

    /// Deposit several nodes as one group, in source order.
    pub fn push_group(&mut self, category: TagCategory, nodes: impl IntoIterator<Item = DocNode>) {
        let before = self.nodes.len();
        self.nodes.extend(nodes);
        self.groups.push(AstGroup {
            category,
            count: self.nodes.len() - before,
        });
    }

    pub fn node_depth(&self) -> usize {
        self.nodes.len()
    }

    pub fn groups(&self) -> &[AstGroup] {
        &self.groups
    }

    pub(crate) fn pop_group(&mut self) -> Option<AstGroup> {
        self.groups.pop()
    }

    pub(crate) fn pop_node(&mut self) -> Option<DocNode> {
        self.nodes.pop()
    }

    /// Drop everything, ready for the next comment.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
