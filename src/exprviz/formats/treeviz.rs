//! Treeviz formatter for display trees
//!
//! Treeviz draws one line per node, which makes a deep expression easy to scan. Nesting is
//! encoded with box-drawing connectors: every child line starts with the prefix inherited
//! from its parent, then `├─` (or `└─` for the last child), the node's icon and its label.
//!
//! So the format is :
//! <prefix><connector> <icon><space><label>[  ⟨literal⟩]
//!
//! Example:
//!
//! λ LambdaExpression [int] Parameters:
//! ├─ ▢ ParameterExpression [int]: a
//! └─ ± Body => BinaryExpression: [Add-int]
//!   ├─ ▢ Left => ParameterExpression [int]: a
//!   └─ ◆ Right => ConstantExpression [int]: 1
//!
//! Icons
//!     Operators:
//!         Binary: ±
//!         Unary: ¬
//!         TypeBinary: ⊨
//!     Control flow:
//!         Block: ▣
//!         Conditional: ?
//!         Goto: ↪
//!         Label: ⚑
//!         Loop: ↻
//!         Switch: ⋔
//!         Try: ⚠
//!     Leaves:
//!         Constant: ◆
//!         Default: ◇
//!         Parameter: ▢
//!         DebugInfo: ⓘ
//!     Access and calls:
//!         Member: .
//!         MethodCall: ƒ
//!         Invocation: ⊳
//!         Index: ⌗
//!         Dynamic: ⚡
//!         Lambda: λ
//!         RuntimeVariables: ⧉
//!     Construction:
//!         New: ✚
//!         NewArray: ⊞
//!         ListInit: ☰
//!         MemberInit: ≔
//!     Synthesized and unknown nodes: ○

use crate::exprviz::ast::{DisplayNode, ExpressionKind};
use crate::exprviz::formats::registry::{FormatError, Formatter};

/// Rendering knobs for treeviz output
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TreevizOptions {
    /// Truncate labels longer than this many characters; 0 keeps them whole
    pub max_label_width: usize,
    /// Append each node's literal text after its label
    pub show_literal: bool,
}

fn truncate(s: &str, max_chars: usize) -> String {
    if max_chars > 0 && s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Get the icon for a node kind
fn get_icon(kind: Option<ExpressionKind>) -> &'static str {
    let Some(kind) = kind else {
        return "○";
    };
    match kind {
        ExpressionKind::Binary => "±",
        ExpressionKind::Unary => "¬",
        ExpressionKind::TypeBinary => "⊨",
        ExpressionKind::Block => "▣",
        ExpressionKind::Conditional => "?",
        ExpressionKind::Goto => "↪",
        ExpressionKind::Label => "⚑",
        ExpressionKind::Loop => "↻",
        ExpressionKind::Switch => "⋔",
        ExpressionKind::Try => "⚠",
        ExpressionKind::Constant => "◆",
        ExpressionKind::Default => "◇",
        ExpressionKind::Parameter => "▢",
        ExpressionKind::DebugInfo => "ⓘ",
        ExpressionKind::Member => ".",
        ExpressionKind::MethodCall => "ƒ",
        ExpressionKind::Invocation => "⊳",
        ExpressionKind::Index => "⌗",
        ExpressionKind::Dynamic => "⚡",
        ExpressionKind::Lambda => "λ",
        ExpressionKind::RuntimeVariables => "⧉",
        ExpressionKind::New => "✚",
        ExpressionKind::NewArray => "⊞",
        ExpressionKind::ListInit => "☰",
        ExpressionKind::MemberInit => "≔",
        ExpressionKind::Extension => "○",
    }
}

fn node_text(node: &DisplayNode, options: &TreevizOptions) -> String {
    let mut text = format!(
        "{} {}",
        get_icon(node.node_type),
        truncate(&node.label, options.max_label_width)
    );
    if options.show_literal {
        if let Some(literal) = &node.literal_text {
            text.push_str(&format!("  ⟨{}⟩", truncate(literal, options.max_label_width)));
        }
    }
    text
}

fn format_node(
    node: &DisplayNode,
    prefix: &str,
    child_index: usize,
    child_count: usize,
    options: &TreevizOptions,
) -> String {
    let mut output = String::new();

    let is_last = child_index == child_count - 1;
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {}\n",
        prefix,
        connector,
        node_text(node, options)
    ));

    if !node.children.is_empty() {
        let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        let child_count = node.children.len();
        for (i, child) in node.children.iter().enumerate() {
            output.push_str(&format_node(child, &child_prefix, i, child_count, options));
        }
    }

    output
}

pub fn to_treeviz_str(tree: &DisplayNode) -> String {
    to_treeviz_str_with_options(tree, &TreevizOptions::default())
}

pub fn to_treeviz_str_with_options(tree: &DisplayNode, options: &TreevizOptions) -> String {
    let mut output = format!("{}\n", node_text(tree, options));
    let child_count = tree.children.len();
    for (i, child) in tree.children.iter().enumerate() {
        output.push_str(&format_node(child, "", i, child_count, options));
    }
    output
}

/// Formatter implementation for treeviz format
#[derive(Debug, Clone, Default)]
pub struct TreevizFormatter {
    options: TreevizOptions,
}

impl TreevizFormatter {
    pub fn new(options: TreevizOptions) -> Self {
        Self { options }
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, tree: &DisplayNode) -> Result<String, FormatError> {
        Ok(to_treeviz_str_with_options(tree, &self.options))
    }

    fn description(&self) -> &str {
        "Visual tree representation with connectors and Unicode icons"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("abc", 3), "abc");
        assert_eq!(truncate("abcdef", 0), "abcdef");
    }

    #[test]
    fn test_connectors_and_prefixes() {
        let tree = DisplayNode::new("root")
            .of_kind(ExpressionKind::Block)
            .with_child(DisplayNode::new("a").with_child(DisplayNode::new("a1")))
            .with_child(DisplayNode::new("b").with_child(DisplayNode::new("b1")));
        assert_eq!(
            to_treeviz_str(&tree),
            "▣ root\n├─ ○ a\n│ └─ ○ a1\n└─ ○ b\n  └─ ○ b1\n"
        );
    }

    #[test]
    fn test_show_literal() {
        let tree = DisplayNode::new("ConstantExpression [int]: 1")
            .of_kind(ExpressionKind::Constant)
            .with_literal("1");
        let options = TreevizOptions {
            show_literal: true,
            ..Default::default()
        };
        assert_eq!(
            to_treeviz_str_with_options(&tree, &options),
            "◆ ConstantExpression [int]: 1  ⟨1⟩\n"
        );
    }
}
