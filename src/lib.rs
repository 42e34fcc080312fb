//! # exprviz
//!
//! Turns expression trees into generic display trees.
//!
//! A host (typically a debugger visualizer) hands over an expression tree. The crate walks it
//! once and returns a [DisplayNode](exprviz::ast::DisplayNode) tree: every node carries a
//! human readable label, its children in structural order and a literal text used as tooltip.
//!
//! File Layout
//!
//!     src/exprviz
//!       ├── ast         Expression nodes, type descriptors, literal values, the display tree
//!       ├── building    The tree builder (expression -> display tree)
//!       ├── formats     Type names, literal values, treeviz and the format registry
//!       ├── config      Layered configuration (embedded defaults + user files)
//!       └── testing     Sample expression trees
//!
//! For the data flow and the label of every node kind, see the [building](exprviz::building)
//! module.

pub mod exprviz;
