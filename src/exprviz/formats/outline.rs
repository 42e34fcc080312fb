//! Plain label outline
//!
//! One label per line, indented two spaces per level of nesting, no icons. Handy for
//! diffing trees or pasting into plain-text reports.

use crate::exprviz::ast::DisplayNode;
use crate::exprviz::formats::registry::{FormatError, Formatter};

pub fn to_outline_str(tree: &DisplayNode) -> String {
    let mut output = String::new();
    write_node(tree, 0, &mut output);
    output
}

fn write_node(node: &DisplayNode, level: usize, output: &mut String) {
    output.push_str(&"  ".repeat(level));
    output.push_str(&node.label);
    output.push('\n');
    for child in &node.children {
        write_node(child, level + 1, output);
    }
}

/// Formatter implementation for the labels outline
pub struct OutlineFormatter;

impl Formatter for OutlineFormatter {
    fn name(&self) -> &str {
        "labels"
    }

    fn serialize(&self, tree: &DisplayNode) -> Result<String, FormatError> {
        Ok(to_outline_str(tree))
    }

    fn description(&self) -> &str {
        "Indented node labels, two spaces per level"
    }
}
