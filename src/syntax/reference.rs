//! Member references, parameter names and the return marker.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use super::TypeReference;

/// One argument of a method/constructor reference, e.g. `String[] names`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Argument {
    /// Optional parameter name following the type
    pub name: Option<SmolStr>,
    /// From the start of the type to the end of the argument
    pub range: TextRange,
    pub type_ref: TypeReference,
}

/// `Type#field`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldReference {
    pub token: SmolStr,
    pub range: TextRange,
    pub receiver: TypeReference,
    pub tag_range: TextRange,
}

/// `Type#method(...)` where `method` is not the receiver's simple name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageSend {
    pub selector: SmolStr,
    pub range: TextRange,
    pub receiver: TypeReference,
    /// `None` for the `#method` form without parentheses
    pub arguments: Option<Box<[Argument]>>,
}

/// `Type#Type(...)`: a constructor reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AllocationExpression {
    /// Span of the member name
    pub range: TextRange,
    pub type_ref: TypeReference,
    pub arguments: Option<Box<[Argument]>>,
}

/// Name following `@param`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SingleNameReference {
    pub token: SmolStr,
    pub range: TextRange,
    pub tag_range: TextRange,
}

/// Position of an `@return` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReturnStatement {
    pub range: TextRange,
    /// End of the token in the raw source. Ranges are raw source offsets
    /// already, so this equals `range.end()`, escapes included.
    pub raw_end: TextSize,
}

/// Target of an `@see` or `{@link}` tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    Type(TypeReference),
    Field(FieldReference),
    Method(MessageSend),
    Constructor(AllocationExpression),
}

impl Reference {
    /// Type the reference is resolved against.
    pub fn receiver(&self) -> &TypeReference {
        match self {
            Self::Type(type_ref) => type_ref,
            Self::Field(field) => &field.receiver,
            Self::Method(send) => &send.receiver,
            Self::Constructor(alloc) => &alloc.type_ref,
        }
    }

    pub fn range(&self) -> TextRange {
        match self {
            Self::Type(type_ref) => type_ref.range(),
            Self::Field(field) => field.range,
            Self::Method(send) => send.range,
            Self::Constructor(alloc) => alloc.range,
        }
    }
}
