//! Expression to display tree
//!
//!     Every node kind maps to one label and an ordered list of children:
//!
//!         Binary            BinaryExpression: [{op}-{type}]              Left, Right
//!         Block             BlockExpression Expressions:                 each expression
//!         Conditional       ConditionalExpression: [{type}]              Test, IfTrue, IfFalse
//!         Constant          ConstantExpression [{type}]: {literal}       -
//!         DebugInfo         DebugInfoExpression:                         one leaf per field
//!         Default           DefaultExpression: [{kind word}-{type}]      -
//!         Dynamic           DynamicExpression [{delegate}] Arguments:    each argument
//!         Goto              GotoExpression: [{type}]                     Kind, Target, Value?
//!         Index             IndexExpression [{indexer}] Arguments:       each argument, Object
//!         Invocation        InvocationExpression [{target}] Arguments:   each argument, Expression
//!         Label             LabelExpression [{type}]                     Target, DefaultValue?
//!         Lambda            LambdaExpression [{return}] Parameters:      each parameter, Body
//!         ListInit          ListInitExpression                           the new expression
//!         Loop              LoopExpression                               Body
//!         Member            MemberExpression [{type}]: {member}          -
//!         MemberInit        MemberInitExpression [{type}]:               one leaf per binding
//!         MethodCall        MethodCallExpression [{method}] Arguments:   each argument
//!         NewArray          NewArrayExpression [{type}]                  each expression
//!         New               NewExpression Arguments:                     each argument, by member
//!         Parameter         ParameterExpression [{type}]: {name}         -
//!         RuntimeVariables  RuntimeVariablesExpression [{type}]          each variable
//!         Switch            SwitchExpression [{type}]                    Case: Value.., Body
//!         Try               TryExpression [{type}]                       Try, Catch.., Finally?
//!         TypeBinary        TypeBinaryExpression [{type}] Operand:       the expression
//!         Unary             UnaryExpression [{op}-{type}] Operand:       the operand
//!         Extension         Unknown Node [{type}-{op}]: {text}           -
//!
//!     Optional children (marked `?`) render as `{name} => null` when absent.
//!
//!     A node built with a prefix gets the label `{prefix} => {label}`. Only the node itself
//!     is prefixed; its children get their own prefixes, never the parent's.
//!
//!     Every node produced from an expression carries the expression's default textual form
//!     as literal text, except constants, which carry the rendered literal. Synthesized
//!     nodes (`Case`, `Catch`, debug-info fields, null placeholders) carry none.

use crate::exprviz::ast::elements::*;
use crate::exprviz::ast::{DisplayNode, Expression, ExpressionKind};
use crate::exprviz::formats::{render_type_name, render_value};
use tracing::{debug, trace, warn};

/// Depth at which the builder stops descending unless configured otherwise
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Knobs for the tree builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Nodes at this depth (the root is depth 0) become truncated leaves
    pub max_depth: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Build the display tree of an expression with default options
pub fn build(expression: &Expression, prefix: Option<&str>) -> DisplayNode {
    TreeBuilder::default().build(expression, prefix)
}

/// Turns expressions into display trees
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    options: BuildOptions,
}

impl TreeBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Build the display tree of an expression, labeling the root with `prefix` if given
    pub fn build(&self, expression: &Expression, prefix: Option<&str>) -> DisplayNode {
        self.node(expression, prefix, 0)
    }

    fn node(&self, expression: &Expression, prefix: Option<&str>, depth: usize) -> DisplayNode {
        if depth >= self.options.max_depth {
            warn!(depth, kind = %expression.kind(), "expression too deep, truncating");
            let node = DisplayNode::new(format!(
                "Truncated Node [depth {}]: {}",
                depth,
                expression.kind()
            ));
            return with_prefix(node, prefix);
        }
        trace!(depth, kind = %expression.kind(), "building node");

        let next = depth + 1;
        let node = match expression {
            Expression::Binary(e) => self.binary(e, next),
            Expression::Block(e) => self.block(e, next),
            Expression::Conditional(e) => self.conditional(e, next),
            Expression::Constant(e) => return constant_node(e, prefix),
            Expression::DebugInfo(e) => debug_info_node(e),
            Expression::Default(e) => DisplayNode::new(format!(
                "DefaultExpression: [{}-{}]",
                e.ty.kind_word(),
                render_type_name(&e.ty)
            )),
            Expression::Dynamic(e) => self.dynamic(e, next),
            Expression::Goto(e) => self.goto(e, next),
            Expression::Index(e) => self.index(e, next),
            Expression::Invocation(e) => self.invocation(e, next),
            Expression::Label(e) => self.label(e, next),
            Expression::Lambda(e) => self.lambda(e, next),
            Expression::ListInit(e) => DisplayNode::new("ListInitExpression")
                .with_child(self.new_object(&e.new_expression, None, next)),
            Expression::Loop(e) => {
                DisplayNode::new("LoopExpression").with_child(self.node(&e.body, Some("Body"), next))
            }
            Expression::Member(e) => DisplayNode::new(format!(
                "MemberExpression [{}]: {}",
                render_type_name(&e.ty),
                e.member.name
            )),
            Expression::MemberInit(e) => member_init_node(e),
            Expression::MethodCall(e) => self.method_call(e, next),
            Expression::NewArray(e) => self.new_array(e, next),
            // Returns early: the helper already applies prefix and literal text.
            Expression::New(e) => return self.new_object(e, prefix, depth),
            Expression::Parameter(e) => return parameter_node(e, prefix),
            Expression::RuntimeVariables(e) => runtime_variables_node(e, expression),
            Expression::Switch(e) => self.switch(e, next),
            Expression::Try(e) => self.try_catch(e, next),
            Expression::TypeBinary(e) => self.type_binary(e, next),
            Expression::Unary(e) => self.unary(e, next),
            Expression::Extension(e) => extension_node(e),
        };

        finish(node.of_kind(expression.kind()), prefix, expression)
    }

    fn binary(&self, e: &BinaryExpression, next: usize) -> DisplayNode {
        DisplayNode::new(format!(
            "BinaryExpression: [{}-{}]",
            e.op,
            render_type_name(&e.ty)
        ))
        .with_child(self.node(&e.left, Some("Left"), next))
        .with_child(self.node(&e.right, Some("Right"), next))
    }

    fn block(&self, e: &BlockExpression, next: usize) -> DisplayNode {
        DisplayNode::new("BlockExpression Expressions:").with_children(self.each(&e.expressions, next))
    }

    fn conditional(&self, e: &ConditionalExpression, next: usize) -> DisplayNode {
        DisplayNode::new(format!(
            "ConditionalExpression: [{}]",
            render_type_name(&e.ty)
        ))
        .with_child(self.node(&e.test, Some("Test"), next))
        .with_child(self.node(&e.if_true, Some("IfTrue"), next))
        .with_child(self.node(&e.if_false, Some("IfFalse"), next))
    }

    fn dynamic(&self, e: &DynamicExpression, next: usize) -> DisplayNode {
        DisplayNode::new(format!(
            "DynamicExpression [{}] Arguments:",
            render_type_name(&e.delegate_type)
        ))
        .with_children(self.each(&e.arguments, next))
    }

    fn goto(&self, e: &GotoExpression, next: usize) -> DisplayNode {
        DisplayNode::new(format!("GotoExpression: [{}]", render_type_name(&e.ty)))
            .with_child(DisplayNode::new(format!("Kind => {}", e.kind)))
            .with_child(DisplayNode::new(format!("Target => {}", e.target)))
            .with_child(self.optional(e.value.as_deref(), "Value", next))
    }

    fn index(&self, e: &IndexExpression, next: usize) -> DisplayNode {
        DisplayNode::new(format!(
            "IndexExpression [{}] Arguments:",
            e.indexer.as_deref().unwrap_or_default()
        ))
        .with_children(self.each(&e.arguments, next))
        .with_child(self.node(&e.object, Some("Object"), next))
    }

    fn invocation(&self, e: &InvocationExpression, next: usize) -> DisplayNode {
        DisplayNode::new(format!(
            "InvocationExpression [{}] Arguments:",
            e.expression
        ))
        .with_children(self.each(&e.arguments, next))
        .with_child(self.node(&e.expression, Some("Expression"), next))
    }

    fn label(&self, e: &LabelExpression, next: usize) -> DisplayNode {
        DisplayNode::new(format!(
            "LabelExpression [{}]",
            render_type_name(&e.target.ty)
        ))
        .with_child(DisplayNode::new(format!("Target => {}", e.target)))
        .with_child(self.optional(e.default_value.as_deref(), "DefaultValue", next))
    }

    fn lambda(&self, e: &LambdaExpression, next: usize) -> DisplayNode {
        DisplayNode::new(format!(
            "LambdaExpression [{}] Parameters:",
            render_type_name(&e.return_type)
        ))
        .with_children(e.parameters.iter().map(|p| parameter_node(p, None)))
        .with_child(self.node(&e.body, Some("Body"), next))
    }

    fn method_call(&self, e: &MethodCallExpression, next: usize) -> DisplayNode {
        DisplayNode::new(format!(
            "MethodCallExpression [{}] Arguments:",
            e.method.name
        ))
        .with_children(self.each(&e.arguments, next))
    }

    fn new_array(&self, e: &NewArrayExpression, next: usize) -> DisplayNode {
        DisplayNode::new(format!("NewArrayExpression [{}]", render_type_name(&e.ty)))
            .with_children(self.each(&e.expressions, next))
    }

    fn switch(&self, e: &SwitchExpression, next: usize) -> DisplayNode {
        DisplayNode::new(format!("SwitchExpression [{}]", render_type_name(&e.ty))).with_children(
            e.cases.iter().map(|case| {
                DisplayNode::new("Case")
                    .with_children(
                        case.test_values
                            .iter()
                            .map(|value| self.node(value, Some("Value"), next + 1)),
                    )
                    .with_child(self.node(&case.body, Some("Body"), next + 1))
            }),
        )
    }

    fn try_catch(&self, e: &TryExpression, next: usize) -> DisplayNode {
        DisplayNode::new(format!("TryExpression [{}]", render_type_name(&e.ty)))
            .with_child(self.node(&e.body, Some("Try"), next))
            .with_children(e.handlers.iter().map(|handler| {
                DisplayNode::new("Catch")
                    .with_child(self.optional(handler.filter.as_deref(), "Filter", next + 1))
                    .with_child(self.node(&handler.body, Some("Body"), next + 1))
            }))
            .with_child(self.optional(e.finally.as_deref(), "Finally", next))
    }

    fn type_binary(&self, e: &TypeBinaryExpression, next: usize) -> DisplayNode {
        DisplayNode::new(format!(
            "TypeBinaryExpression [{}] Operand:",
            render_type_name(&e.type_operand)
        ))
        .with_child(self.node(&e.expression, None, next))
    }

    fn unary(&self, e: &UnaryExpression, next: usize) -> DisplayNode {
        DisplayNode::new(format!(
            "UnaryExpression [{}-{}] Operand:",
            e.op,
            render_type_name(&e.ty)
        ))
        .with_child(self.node(&e.operand, None, next))
    }

    fn each<'a>(
        &'a self,
        expressions: &'a [Expression],
        depth: usize,
    ) -> impl Iterator<Item = DisplayNode> + 'a {
        expressions.iter().map(move |e| self.node(e, None, depth))
    }

    /// Subtree for an optional child, or a `{name} => null` placeholder
    fn optional(&self, expression: Option<&Expression>, name: &str, depth: usize) -> DisplayNode {
        match expression {
            Some(e) => self.node(e, Some(name), depth),
            None => DisplayNode::new(format!("{} => null", name)),
        }
    }

    fn new_object(&self, e: &NewExpression, prefix: Option<&str>, depth: usize) -> DisplayNode {
        let next = depth + 1;
        let arguments = e
            .arguments
            .iter()
            .enumerate()
            .map(|(i, argument)| self.node(argument, e.member_name(i), next));
        let node = DisplayNode::new("NewExpression Arguments:")
            .of_kind(ExpressionKind::New)
            .with_children(arguments)
            .with_literal(e.to_string());
        with_prefix(node, prefix)
    }
}

fn parameter_node(parameter: &ParameterExpression, prefix: Option<&str>) -> DisplayNode {
    let node = DisplayNode::new(format!(
        "ParameterExpression [{}]: {}",
        render_type_name(&parameter.ty),
        parameter.name()
    ))
    .of_kind(ExpressionKind::Parameter)
    .with_literal(parameter.to_string());
    with_prefix(node, prefix)
}

fn constant_node(e: &ConstantExpression, prefix: Option<&str>) -> DisplayNode {
    let literal = render_value(&e.value, &e.ty);
    let node = DisplayNode::new(format!(
        "ConstantExpression [{}]: {}",
        render_type_name(&e.ty),
        literal
    ))
    .of_kind(ExpressionKind::Constant)
    .with_literal(literal);
    with_prefix(node, prefix)
}

fn debug_info_node(e: &DebugInfoExpression) -> DisplayNode {
    DisplayNode::new("DebugInfoExpression:").with_children([
        DisplayNode::new(format!("FileName: {}", e.document.file_name)),
        DisplayNode::new(format!("Language: {}", e.document.language)),
        DisplayNode::new(format!("LanguageVendor: {}", e.document.language_vendor)),
        DisplayNode::new(format!("DocumentType: {}", e.document.document_type)),
        DisplayNode::new(format!("StartLine: {}", e.start_line)),
        DisplayNode::new(format!("StartColumn: {}", e.start_column)),
        DisplayNode::new(format!("EndLine: {}", e.end_line)),
        DisplayNode::new(format!("EndColumn: {}", e.end_column)),
    ])
}

fn member_init_node(e: &MemberInitExpression) -> DisplayNode {
    DisplayNode::new(format!(
        "MemberInitExpression [{}]:",
        render_type_name(&e.new_expression.ty)
    ))
    .with_children(
        e.bindings
            .iter()
            .map(|binding| DisplayNode::new(binding.to_string())),
    )
}

fn runtime_variables_node(e: &RuntimeVariablesExpression, expression: &Expression) -> DisplayNode {
    DisplayNode::new(format!(
        "RuntimeVariablesExpression [{}]",
        render_type_name(&expression.ty())
    ))
    .with_children(e.variables.iter().map(|v| parameter_node(v, None)))
}

fn extension_node(e: &ExtensionExpression) -> DisplayNode {
    debug!(text = %e.text, "no dedicated rendering for extension node");
    let label = match &e.op_kind {
        Some(op) => format!(
            "Unknown Node [{}-{}]: {}",
            render_type_name(&e.ty),
            op,
            e.text
        ),
        None => format!("Unknown Node [{}]: {}", render_type_name(&e.ty), e.text),
    };
    DisplayNode::new(label)
}

fn with_prefix(mut node: DisplayNode, prefix: Option<&str>) -> DisplayNode {
    if let Some(prefix) = prefix {
        node.label = format!("{} => {}", prefix, node.label);
    }
    node
}

fn finish(mut node: DisplayNode, prefix: Option<&str>, expression: &Expression) -> DisplayNode {
    if node.literal_text.is_none() {
        node.literal_text = Some(expression.to_string());
    }
    with_prefix(node, prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exprviz::ast::{TypeDesc, Value};

    fn param(name: &str) -> Expression {
        Expression::parameter(TypeDesc::int(), name)
    }

    #[test]
    fn test_prefix_applies_to_root_only() {
        let sum = Expression::make_binary(
            BinaryOp::Add,
            param("a"),
            Expression::constant(1, TypeDesc::int()),
        );
        let tree = build(&sum, Some("Body"));
        assert_eq!(tree.label, "Body => BinaryExpression: [Add-int]");
        assert_eq!(
            tree.child_labels(),
            vec![
                "Left => ParameterExpression [int]: a",
                "Right => ConstantExpression [int]: 1"
            ]
        );
    }

    #[test]
    fn test_literal_text() {
        let sum = Expression::make_binary(
            BinaryOp::Add,
            param("a"),
            Expression::constant(1, TypeDesc::int()),
        );
        let tree = build(&sum, None);
        assert_eq!(tree.literal_text.as_deref(), Some("(a + 1)"));
        assert_eq!(tree.children[1].literal_text.as_deref(), Some("1"));
        assert_eq!(tree.node_type, Some(ExpressionKind::Binary));
    }

    #[test]
    fn test_constant_null() {
        let tree = build(&Expression::constant(Value::Null, TypeDesc::string()), None);
        assert_eq!(tree.label, "ConstantExpression [string]: null");
        assert_eq!(tree.literal_text.as_deref(), Some("null"));
    }

    #[test]
    fn test_optional_children() {
        let goto = Expression::goto(LabelTarget::named("end"));
        let tree = build(&goto, None);
        assert_eq!(
            tree.child_labels(),
            vec!["Kind => Goto", "Target => end", "Value => null"]
        );
        assert_eq!(tree.children[2].literal_text, None);
        assert_eq!(tree.children[2].node_type, None);
    }

    #[test]
    fn test_depth_guard() {
        let mut chain = param("x");
        for _ in 0..10 {
            chain = Expression::unary(UnaryOp::Negate, chain, TypeDesc::int());
        }
        let builder = TreeBuilder::new(BuildOptions { max_depth: 3 });
        let tree = builder.build(&chain, None);
        assert_eq!(tree.depth(), 4);
        let deepest = tree.iter().last().expect("non-empty tree");
        assert_eq!(deepest.label, "Truncated Node [depth 3]: Unary");
        assert!(deepest.is_leaf());
    }

    #[test]
    fn test_very_deep_chain_with_default_options() {
        let handle = std::thread::Builder::new()
            .stack_size(16 * 1024 * 1024)
            .spawn(|| {
                let mut chain = param("x");
                for _ in 0..200_000 {
                    chain = Expression::unary(UnaryOp::Negate, chain, TypeDesc::int());
                }
                let tree = build(&chain, None);
                let deepest = tree.iter().last().map(|node| node.label.clone());
                let root_text = tree.literal_text.clone();
                // Dropping the chain itself recurses once per level.
                std::mem::forget(chain);
                (tree.depth(), deepest, root_text)
            })
            .expect("spawn builder thread");
        let (depth, deepest, root_text) = handle.join().expect("builder thread");
        assert_eq!(depth, DEFAULT_MAX_DEPTH + 1);
        assert_eq!(
            deepest.as_deref(),
            Some("Truncated Node [depth 256]: Unary")
        );
        let root_text = root_text.expect("root literal text");
        assert!(root_text.contains("..."));
        assert!(!root_text.contains('x'));
    }

    #[test]
    fn test_extension_without_op_kind() {
        let ext = Expression::extension(TypeDesc::int(), None, "custom");
        assert_eq!(build(&ext, None).label, "Unknown Node [int]: custom");
        let ext = Expression::extension(TypeDesc::int(), Some("Extension"), "custom");
        assert_eq!(build(&ext, None).label, "Unknown Node [int-Extension]: custom");
    }
}
