//! AST definitions for expression trees
//!
//!     This module holds everything the tree builder reads and everything it produces.
//!
//! Expressions
//!
//!     An expression tree is a finite tree where every node is one of a closed set of
//!     operation kinds: binary and unary operators, blocks, conditionals, constants, member
//!     and method access, construction, control flow (goto, label, loop, switch, try) and so
//!     on. The set is modeled as the [Expression] sum type, one variant per kind. Nodes a host
//!     defines on its own (or kinds added after this crate was written) travel through the
//!     [Extension](elements::ExtensionExpression) variant, so no input is ever rejected.
//!
//!     The node records live in the [elements] module, grouped by family. Each record knows
//!     its default textual form through `fmt::Display`; that one line rendering is what the
//!     display tree uses as literal text.
//!
//! Types and Values
//!
//!     [TypeDesc] describes a type by identity only: primitives, named types, generics (open
//!     or closed) and arrays (jagged or rectangular). [Value] is a literal carried by a
//!     constant node, including multi-dimensional arrays stored row-major in [ArrayValue].
//!
//! Display Tree
//!
//!     [DisplayNode] is the output artifact: a label, ordered children and an optional
//!     literal text. It mirrors a finite AST, so it is always a finite tree with exclusive
//!     ownership.

pub mod display_node;
pub mod elements;
pub mod error;
pub mod expression;
pub mod factory;
pub mod types;
pub mod value;

pub use display_node::DisplayNode;
pub use elements::*;
pub use error::ShapeError;
pub use expression::{Expression, ExpressionKind, TEXT_DEPTH_LIMIT};
pub use types::{Primitive, TypeDesc, TypeKind};
pub use value::{ArrayValue, RowMajorIndices, Value};
