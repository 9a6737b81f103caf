//! Node construction operations called back by the tag dispatcher.
//!
//! Each operation consumes raw material the dispatcher left in the
//! [`ParseContext`](super::ParseContext) and returns one finished node. The
//! dispatcher decides where the node goes (usually `push_node`).

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};
use tracing::trace;

use super::errors::JavadocError;
use super::javadoc_parser::JavadocParser;
use crate::syntax::{
    AllocationExpression, Argument, FieldReference, MessageSend, QualifiedTypeReference, Reference,
    ReturnStatement, SingleNameReference, SingleTypeReference, TypeReference,
};

impl JavadocParser {
    /// Build a type reference from the top identifier-length record.
    ///
    /// A length of 0 yields `None` (an optional type that was not written).
    /// Exactly `length` identifiers are consumed.
    pub fn build_type_reference(&mut self) -> Result<Option<TypeReference>, JavadocError> {
        const OP: &str = "build_type_reference";
        let tag_range = self.context.tag_range();
        let length = self.context.pop_identifier_length(OP)?;
        let (mut tokens, mut positions) = self.context.pop_identifiers(length, OP)?;

        let type_ref = match length {
            0 => None,
            1 => match (tokens.pop(), positions.pop()) {
                (Some(token), Some(range)) => Some(TypeReference::Single(SingleTypeReference {
                    token,
                    range,
                    tag_range,
                })),
                _ => return Err(JavadocError::contract(OP, "identifier stacks out of step")),
            },
            _ => Some(TypeReference::Qualified(QualifiedTypeReference {
                tokens: tokens.into_boxed_slice(),
                positions: positions.into_boxed_slice(),
                tag_range,
            })),
        };
        trace!(length, ?type_ref, "built type reference");
        Ok(type_ref)
    }

    /// Bind an argument name to its (possibly array) type.
    pub fn build_argument(
        &self,
        name: Option<SmolStr>,
        dimensions: u32,
        type_ref: TypeReference,
        arg_end: TextSize,
    ) -> Argument {
        let type_ref = type_ref.into_array(dimensions);
        let start = type_ref.range().start();
        Argument {
            name,
            range: TextRange::new(start, arg_end.max(start)),
            type_ref,
        }
    }

    /// `Type#field`, or `#field` against the enclosing type.
    pub fn build_field_reference(
        &mut self,
        receiver: Option<TypeReference>,
    ) -> Result<FieldReference, JavadocError> {
        const OP: &str = "build_field_reference";
        let receiver = self.resolve_receiver(receiver)?;
        let (token, range) = self.context.leading_identifier(OP)?;
        self.context.reset_identifiers();

        trace!(%token, receiver = %receiver.qualified_name(), "built field reference");
        Ok(FieldReference {
            token,
            range,
            receiver,
            tag_range: self.context.tag_range(),
        })
    }

    /// `Type#member(...)`: a constructor when `member` equals the receiver's
    /// simple name, a method otherwise.
    ///
    /// `arguments` is `None` when the reference had no parentheses.
    pub fn build_method_reference(
        &mut self,
        receiver: Option<TypeReference>,
        arguments: Option<Vec<Argument>>,
    ) -> Result<Reference, JavadocError> {
        const OP: &str = "build_method_reference";
        let receiver = self.resolve_receiver(receiver)?;
        let (member, range) = self.context.leading_identifier(OP)?;
        self.context.reset_identifiers();

        let is_constructor = receiver.last_segment() == Some(member.as_str());
        let arguments = arguments.map(Vec::into_boxed_slice);
        trace!(%member, is_constructor, "built member reference");

        Ok(if is_constructor {
            Reference::Constructor(AllocationExpression {
                range,
                type_ref: receiver,
                arguments,
            })
        } else {
            Reference::Method(MessageSend {
                selector: member,
                range,
                receiver,
                arguments,
            })
        })
    }

    /// Record an `@return` at the current token. A later `@return` replaces
    /// an earlier one.
    pub fn build_return_statement(&mut self) -> ReturnStatement {
        let token = self.context.current_token();
        let statement = ReturnStatement {
            range: token.range,
            raw_end: token.raw_end,
        };
        if self.context.return_statement.is_some() {
            trace!("replacing earlier @return");
        }
        self.context.return_statement = Some(statement);
        statement
    }

    /// Name reference at the current token, e.g. the name after `@param`.
    pub fn build_single_name_reference(&self) -> SingleNameReference {
        let token = self.context.current_token();
        SingleNameReference {
            token: token.text.clone(),
            range: token.range,
            tag_range: self.context.tag_range(),
        }
    }

    /// Substitute the enclosing type when no receiver was written.
    fn resolve_receiver(
        &self,
        receiver: Option<TypeReference>,
    ) -> Result<TypeReference, JavadocError> {
        if let Some(receiver) = receiver {
            return Ok(receiver);
        }
        let name = self
            .enclosing_type_name()
            .ok_or(JavadocError::MissingEnclosingName)?;
        Ok(TypeReference::Single(SingleTypeReference {
            token: SmolStr::new(name),
            range: TextRange::default(),
            tag_range: TextRange::default(),
        }))
    }
}
