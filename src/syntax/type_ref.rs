//! Type references appearing in `@throws`, `@see` and method argument lists.

use smol_str::SmolStr;
use text_size::TextRange;

/// A type named by a single identifier, e.g. `IOException`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SingleTypeReference {
    pub token: SmolStr,
    /// Span of the identifier
    pub range: TextRange,
    /// Span of the tag this reference was built for
    pub tag_range: TextRange,
}

/// A dotted type name, e.g. `java.io.IOException`.
///
/// `tokens[0]` is the outermost qualifier; `positions` is index-aligned with
/// `tokens`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedTypeReference {
    pub tokens: Box<[SmolStr]>,
    pub positions: Box<[TextRange]>,
    pub tag_range: TextRange,
}

impl QualifiedTypeReference {
    /// Span from the first qualifier to the last segment.
    pub fn range(&self) -> TextRange {
        match (self.positions.first(), self.positions.last()) {
            (Some(first), Some(last)) => first.cover(*last),
            _ => self.tag_range,
        }
    }
}

/// The four type reference shapes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeReference {
    Single(SingleTypeReference),
    Qualified(QualifiedTypeReference),
    ArraySingle {
        reference: SingleTypeReference,
        dimensions: u32,
    },
    ArrayQualified {
        reference: QualifiedTypeReference,
        dimensions: u32,
    },
}

impl TypeReference {
    /// Wrap this reference in its array form. `dimensions == 0` is the identity.
    ///
    /// The original token and positions are kept; an array reference is never
    /// re-wrapped, its dimension count is replaced.
    pub fn into_array(self, dimensions: u32) -> Self {
        if dimensions == 0 {
            return self;
        }
        match self {
            Self::Single(reference) | Self::ArraySingle { reference, .. } => Self::ArraySingle {
                reference,
                dimensions,
            },
            Self::Qualified(reference) | Self::ArrayQualified { reference, .. } => {
                Self::ArrayQualified {
                    reference,
                    dimensions,
                }
            }
        }
    }

    /// Name segments, outermost first.
    pub fn type_name(&self) -> &[SmolStr] {
        match self {
            Self::Single(reference) | Self::ArraySingle { reference, .. } => {
                std::slice::from_ref(&reference.token)
            }
            Self::Qualified(reference) | Self::ArrayQualified { reference, .. } => {
                &reference.tokens
            }
        }
    }

    /// Simple name: the last segment of the full name.
    pub fn last_segment(&self) -> Option<&str> {
        self.type_name().last().map(SmolStr::as_str)
    }

    /// Dotted full name, e.g. `java.util.List`.
    pub fn qualified_name(&self) -> String {
        self.type_name()
            .iter()
            .map(SmolStr::as_str)
            .collect::<Vec<_>>()
            .join(".")
    }

    pub fn dimensions(&self) -> u32 {
        match self {
            Self::Single(_) | Self::Qualified(_) => 0,
            Self::ArraySingle { dimensions, .. } | Self::ArrayQualified { dimensions, .. } => {
                *dimensions
            }
        }
    }

    pub fn range(&self) -> TextRange {
        match self {
            Self::Single(reference) | Self::ArraySingle { reference, .. } => reference.range,
            Self::Qualified(reference) | Self::ArrayQualified { reference, .. } => {
                reference.range()
            }
        }
    }

    pub fn tag_range(&self) -> TextRange {
        match self {
            Self::Single(reference) | Self::ArraySingle { reference, .. } => reference.tag_range,
            Self::Qualified(reference) | Self::ArrayQualified { reference, .. } => {
                reference.tag_range
            }
        }
    }
}
