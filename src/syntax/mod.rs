//! Javadoc AST.
//!
//! Nodes produced by the construction bridge and collected by the finalizer
//! into a [`Javadoc`]. Every node is immutable once built and carries explicit
//! half-open [`TextRange`](crate::base::TextRange) spans.

mod javadoc;
mod reference;
mod type_ref;

pub use javadoc::Javadoc;
pub use reference::{
    AllocationExpression, Argument, FieldReference, MessageSend, Reference, ReturnStatement,
    SingleNameReference,
};
pub use type_ref::{QualifiedTypeReference, SingleTypeReference, TypeReference};
