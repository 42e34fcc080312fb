//! Main module for exprviz library functionality

pub mod ast;
pub mod building;
pub mod config;
pub mod formats;
pub mod testing;

pub use ast::{DisplayNode, Expression, ExpressionKind, TypeDesc, Value};
pub use building::{build, BuildOptions, TreeBuilder};
pub use formats::{render_type_name, render_value};
