//! Building display trees from expressions
//!
//!     The builder is the one traversal every renderer relies on: it walks an [Expression]
//!     and produces a [DisplayNode] tree. Formatters consume the tree, never the expression.
//!
//!     Labels follow a fixed grammar per node kind, e.g. `BinaryExpression: [Add-int]` or
//!     `MethodCallExpression [Write] Arguments:`. A child that plays a named role carries the
//!     role as a prefix (`Left => ...`); absent optional children appear as `Name => null`.
//!     See [tree_builder] for the full table.
//!
//!     The walk is bounded by [BuildOptions::max_depth]: past that depth a node is replaced
//!     by a `Truncated Node` leaf instead of descending further.
//!
//! [Expression]: crate::exprviz::ast::Expression
//! [DisplayNode]: crate::exprviz::ast::DisplayNode

pub mod tree_builder;

pub use tree_builder::{build, BuildOptions, TreeBuilder, DEFAULT_MAX_DEPTH};
