//! Display tree - the generic, renderable output of the tree builder
//!
//! A display tree is UI agnostic: every node holds a label, its children in structural
//! order and an optional literal text (the tooltip / detail string). Renderers (treeviz, a
//! host's tree widget, JSON) consume the tree instead of walking expressions themselves.

use super::ExpressionKind;
use serde::{Deserialize, Serialize};

/// A node of the display tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayNode {
    /// The expression kind that produced the node; absent for synthesized nodes
    /// (`Case`, `Catch`, null placeholders, debug-info fields)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<ExpressionKind>,

    /// Human readable summary, possibly prefixed with the role of the node (`Left => ...`)
    pub label: String,

    /// Raw textual form of the node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal_text: Option<String>,

    /// Child nodes in structural order
    #[serde(default)]
    pub children: Vec<DisplayNode>,
}

impl DisplayNode {
    /// Create a childless node with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            node_type: None,
            label: label.into(),
            literal_text: None,
            children: Vec::new(),
        }
    }

    /// Tag the node with the kind that produced it
    pub fn of_kind(mut self, kind: ExpressionKind) -> Self {
        self.node_type = Some(kind);
        self
    }

    pub fn with_literal(mut self, text: impl Into<String>) -> Self {
        self.literal_text = Some(text.into());
        self
    }

    /// Add a child node
    pub fn with_child(mut self, child: DisplayNode) -> Self {
        self.children.push(child);
        self
    }

    /// Add multiple children
    pub fn with_children(mut self, children: impl IntoIterator<Item = DisplayNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Labels of the direct children, in order
    pub fn child_labels(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.label.as_str()).collect()
    }

    /// Pre-order iteration over this node and all its descendants
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    /// Number of nodes in the tree rooted here
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Height of the tree rooted here (a leaf has depth 1)
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(DisplayNode::depth).max().unwrap_or(0)
    }
}

/// Pre-order iterator over a display tree
pub struct Iter<'a> {
    stack: Vec<&'a DisplayNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a DisplayNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
