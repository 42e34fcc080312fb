//! Canonical type names
//!
//!     [render_type_name] turns a [TypeDesc] into the name a programmer would write in source.
//!     Rules, in priority order:
//!
//!         1. Primitives use their keyword (`int`, `ulong`, `string`, `void`...).
//!         2. Generics: an open definition renders its bare name without the arity suffix
//!            (`Dictionary`2` -> `Dictionary`); a closed generic renders the open name
//!            followed by its rendered arguments: `Dictionary<int, string>`.
//!         3. Arrays: the innermost non-array element is rendered once, followed by one
//!            bracket group per array level. A rectangular level of rank r contributes `[`,
//!            r-1 commas and `]`. Levels appear in source order, outermost first, so an array
//!            of rank-1 arrays of rank-2 arrays reads `int[][,]`. The runtime name of the same
//!            type is `Int32[,][]`: runtime names list the levels the other way around.
//!         4. Anything else keeps its simple name.

use crate::exprviz::ast::types::rank_brackets;
use crate::exprviz::ast::{Primitive, TypeDesc};

/// Render the source-like name of a type
pub fn render_type_name(ty: &TypeDesc) -> String {
    match ty {
        TypeDesc::Primitive(primitive) => primitive_name(*primitive).to_string(),
        TypeDesc::Generic {
            name, arguments, ..
        } => {
            let bare = strip_arity(name);
            if arguments.is_empty() {
                bare.to_string()
            } else {
                let arguments: Vec<String> = arguments.iter().map(render_type_name).collect();
                format!("{}<{}>", bare, arguments.join(", "))
            }
        }
        TypeDesc::Array { .. } => render_array_name(ty),
        TypeDesc::Named { name, .. } => name.clone(),
    }
}

/// Keyword of a primitive kind
pub fn primitive_name(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::Byte => "byte",
        Primitive::SByte => "sbyte",
        Primitive::Int16 => "short",
        Primitive::UInt16 => "ushort",
        Primitive::Int32 => "int",
        Primitive::UInt32 => "uint",
        Primitive::Int64 => "long",
        Primitive::UInt64 => "ulong",
        Primitive::Single => "float",
        Primitive::Double => "double",
        Primitive::Decimal => "decimal",
        Primitive::Char => "char",
        Primitive::String => "string",
        Primitive::Boolean => "bool",
        Primitive::Object => "object",
        Primitive::Void => "void",
    }
}

fn strip_arity(name: &str) -> &str {
    match name.find('`') {
        Some(index) => &name[..index],
        None => name,
    }
}

fn render_array_name(ty: &TypeDesc) -> String {
    let mut groups = String::new();
    let mut current = ty;
    while let TypeDesc::Array { element, rank } = current {
        groups.push_str(&rank_brackets(*rank));
        current = element;
    }
    format!("{}{}", render_type_name(current), groups)
}
