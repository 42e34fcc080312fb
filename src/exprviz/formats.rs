//! Output formats
//!
//! This module contains the two renderers the tree builder relies on and the renderings
//! of a finished display tree:
//! - Type names ([type_name]) and literal values ([literal]), used inside labels
//! - Display trees to text (treeviz, labels outline) and JSON, behind the [registry]

pub mod literal;
pub mod outline;
pub mod registry;
pub mod treeviz;
pub mod type_name;

pub use literal::{render_value, NULL_LITERAL};
pub use outline::{to_outline_str, OutlineFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter, JsonFormatter};
pub use treeviz::{to_treeviz_str, to_treeviz_str_with_options, TreevizFormatter, TreevizOptions};
pub use type_name::render_type_name;
