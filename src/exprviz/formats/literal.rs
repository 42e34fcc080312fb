//! Literal rendering for constant nodes
//!
//!     [render_value] turns a [Value] and the type it was declared with into the text shown
//!     after a constant node's label. Null prints as [NULL_LITERAL]; text is double-quoted,
//!     characters single-quoted, other scalars print their default form.
//!
//! Arrays
//!
//!     A zero-based vector prints `{ a, b, }`: every element is followed by `, ` and the
//!     closing brace comes last. Any other array is walked in row-major order, opening one
//!     brace group per outer dimension. When an outer index changes between two elements,
//!     the groups from that dimension inward are closed and reopened:
//!
//!         2 x 3 of 1..6   ->   { { 1, 2, 3, }, { 4, 5, 6, }, }
//!
//!     Elements are rendered against the array's element type, so jagged values nest.
//!     An array without elements prints `{ }` whatever its rank.

use crate::exprviz::ast::{ArrayValue, Primitive, TypeDesc, Value};

/// Spelling of the null literal
pub const NULL_LITERAL: &str = "null";

static OBJECT: TypeDesc = TypeDesc::Primitive(Primitive::Object);

/// Render a literal value declared with the given type
pub fn render_value(value: &Value, declared: &TypeDesc) -> String {
    match value {
        Value::Null => NULL_LITERAL.to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Char(c) => format!("'{}'", c),
        Value::Int(i) => i.to_string(),
        Value::UInt(u) => u.to_string(),
        Value::Float(x) => {
            if *declared == TypeDesc::Primitive(Primitive::Single) {
                (*x as f32).to_string()
            } else {
                x.to_string()
            }
        }
        Value::Str(s) => format!("\"{}\"", s),
        Value::Object(text) => text.clone(),
        Value::Array(array) => render_array(array, declared.element_type().unwrap_or(&OBJECT)),
    }
}

fn render_array(array: &ArrayValue, element: &TypeDesc) -> String {
    if array.is_empty() {
        return "{ }".to_string();
    }

    let mut out = String::from("{ ");
    if array.rank() == 1 && array.is_zero_based() {
        for value in array.elements() {
            out.push_str(&render_value(value, element));
            out.push_str(", ");
        }
        out.push('}');
        return out;
    }

    let outer = array.rank() - 1;
    let mut previous: Option<Vec<i64>> = None;
    for (index, value) in array.indexed() {
        match &previous {
            None => out.push_str(&"{ ".repeat(outer)),
            Some(prev) => {
                if let Some(dim) = (0..outer).find(|&d| prev[d] != index[d]) {
                    out.push_str(&"}, ".repeat(outer - dim));
                    out.push_str(&"{ ".repeat(outer - dim));
                }
            }
        }
        out.push_str(&render_value(value, element));
        out.push_str(", ");
        previous = Some(index);
    }
    out.push_str(&"}, ".repeat(outer));
    out.push('}');
    out
}
