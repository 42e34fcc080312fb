//! Type descriptors
//!
//!     A [TypeDesc] names a type. It is never laid out or evaluated; the crate only asks it
//!     questions (is it generic, is it an array, what is its element type or rank) and turns
//!     it into text.
//!
//!     Four shapes exist:
//!         - Primitive: the builtin value and reference kinds (integers, floats, decimal,
//!           bool, char, string, object, void).
//!         - Named: any other type, by simple name.
//!         - Generic: a generic type. Without arguments it is the open definition, whose
//!           runtime name may carry an arity suffix (`Dictionary`2`). With arguments it is
//!           closed.
//!         - Array: an element type and a rank. Rank 1 is a vector, rank > 1 is rectangular.
//!           An array whose element is itself an array is jagged.
//!
//! Runtime names
//!
//!     Besides the source-like names produced by
//!     [render_type_name](crate::exprviz::formats::render_type_name), every descriptor has a
//!     runtime metadata name ([TypeDesc::runtime_name]): `Int32`, `Dictionary`2`, `Int32[,][]`.
//!     Runtime names list the bracket groups of a jagged array innermost first, which is the
//!     reverse of source order. Default textual forms of expressions use runtime names.

use std::fmt;
use strum::{Display, EnumIter};

/// Builtin primitive kinds. The variant names are the runtime names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Primitive {
    Byte,
    SByte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Single,
    Double,
    Decimal,
    Char,
    String,
    Boolean,
    Object,
    Void,
}

impl Primitive {
    pub fn kind(self) -> TypeKind {
        match self {
            Primitive::String | Primitive::Object => TypeKind::Class,
            _ => TypeKind::Struct,
        }
    }
}

/// Declared kind of a type, as used by default-value labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Delegate,
    Enum,
}

/// A reference to a type's identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDesc {
    Primitive(Primitive),
    Named {
        name: String,
        kind: TypeKind,
    },
    Generic {
        name: String,
        kind: TypeKind,
        arguments: Vec<TypeDesc>,
    },
    Array {
        element: Box<TypeDesc>,
        rank: usize,
    },
}

impl TypeDesc {
    pub fn int() -> Self {
        TypeDesc::Primitive(Primitive::Int32)
    }

    pub fn long() -> Self {
        TypeDesc::Primitive(Primitive::Int64)
    }

    pub fn double() -> Self {
        TypeDesc::Primitive(Primitive::Double)
    }

    pub fn bool() -> Self {
        TypeDesc::Primitive(Primitive::Boolean)
    }

    pub fn char() -> Self {
        TypeDesc::Primitive(Primitive::Char)
    }

    pub fn string() -> Self {
        TypeDesc::Primitive(Primitive::String)
    }

    pub fn object() -> Self {
        TypeDesc::Primitive(Primitive::Object)
    }

    pub fn void() -> Self {
        TypeDesc::Primitive(Primitive::Void)
    }

    /// A plain named type of the given kind
    pub fn named(name: impl Into<String>, kind: TypeKind) -> Self {
        TypeDesc::Named {
            name: name.into(),
            kind,
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::named(name, TypeKind::Class)
    }

    pub fn structure(name: impl Into<String>) -> Self {
        Self::named(name, TypeKind::Struct)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::named(name, TypeKind::Interface)
    }

    /// A generic type. An empty argument list yields the open definition.
    pub fn generic(name: impl Into<String>, kind: TypeKind, arguments: Vec<TypeDesc>) -> Self {
        TypeDesc::Generic {
            name: name.into(),
            kind,
            arguments,
        }
    }

    /// Wrap this type as the element of an array of the given rank (at least 1)
    pub fn array_of(self, rank: usize) -> Self {
        TypeDesc::Array {
            element: Box::new(self),
            rank: rank.max(1),
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeDesc::Primitive(_))
    }

    pub fn is_generic(&self) -> bool {
        matches!(self, TypeDesc::Generic { .. })
    }

    /// True for a generic type with no supplied arguments
    pub fn is_generic_definition(&self) -> bool {
        matches!(self, TypeDesc::Generic { arguments, .. } if arguments.is_empty())
    }

    pub fn is_array(&self) -> bool {
        matches!(self, TypeDesc::Array { .. })
    }

    pub fn element_type(&self) -> Option<&TypeDesc> {
        match self {
            TypeDesc::Array { element, .. } => Some(element),
            _ => None,
        }
    }

    pub fn rank(&self) -> Option<usize> {
        match self {
            TypeDesc::Array { rank, .. } => Some(*rank),
            _ => None,
        }
    }

    pub fn generic_arguments(&self) -> &[TypeDesc] {
        match self {
            TypeDesc::Generic { arguments, .. } => arguments,
            _ => &[],
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            TypeDesc::Primitive(primitive) => primitive.kind(),
            TypeDesc::Named { kind, .. } | TypeDesc::Generic { kind, .. } => *kind,
            TypeDesc::Array { .. } => TypeKind::Class,
        }
    }

    /// The declared-kind word: `delegate`, `class`, `struct` or `interface`
    ///
    /// Enums are value types and say `struct`.
    pub fn kind_word(&self) -> String {
        match self.kind() {
            TypeKind::Enum => TypeKind::Struct.to_string(),
            kind => kind.to_string(),
        }
    }

    /// Runtime metadata name. Jagged bracket groups come innermost first.
    pub fn runtime_name(&self) -> String {
        match self {
            TypeDesc::Primitive(primitive) => primitive.to_string(),
            TypeDesc::Named { name, .. } | TypeDesc::Generic { name, .. } => name.clone(),
            TypeDesc::Array { element, rank } => {
                format!("{}{}", element.runtime_name(), rank_brackets(*rank))
            }
        }
    }
}

impl From<Primitive> for TypeDesc {
    fn from(primitive: Primitive) -> Self {
        TypeDesc::Primitive(primitive)
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.runtime_name())
    }
}

/// The bracket group of one array level: `[]`, `[,]`, `[,,]`...
pub(crate) fn rank_brackets(rank: usize) -> String {
    format!("[{}]", ",".repeat(rank.saturating_sub(1)))
}
