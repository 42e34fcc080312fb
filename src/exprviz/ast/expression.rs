//! The expression sum type
//!
//!     [Expression] has one variant per node kind. The set is closed: the tree builder
//!     matches on it exhaustively, and anything outside the set travels as
//!     [Expression::Extension].
//!
//!     [ExpressionKind] is the fieldless discriminant of [Expression], derived with `strum`.
//!     It tags display nodes with the kind that produced them and can be iterated.

use super::elements::*;
use super::TypeDesc;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use strum::{Display, EnumDiscriminants, EnumIter};

#[derive(Debug, Clone, PartialEq, EnumDiscriminants)]
#[strum_discriminants(
    name(ExpressionKind),
    derive(Hash, Display, EnumIter, Serialize, Deserialize)
)]
pub enum Expression {
    Binary(BinaryExpression),
    Block(BlockExpression),
    Conditional(ConditionalExpression),
    Constant(ConstantExpression),
    DebugInfo(DebugInfoExpression),
    Default(DefaultExpression),
    Dynamic(DynamicExpression),
    Goto(GotoExpression),
    Index(IndexExpression),
    Invocation(InvocationExpression),
    Label(LabelExpression),
    Lambda(LambdaExpression),
    ListInit(ListInitExpression),
    Loop(LoopExpression),
    Member(MemberExpression),
    MemberInit(MemberInitExpression),
    MethodCall(MethodCallExpression),
    NewArray(NewArrayExpression),
    New(NewExpression),
    Parameter(ParameterExpression),
    RuntimeVariables(RuntimeVariablesExpression),
    Switch(SwitchExpression),
    Try(TryExpression),
    TypeBinary(TypeBinaryExpression),
    Unary(UnaryExpression),
    Extension(ExtensionExpression),
}

impl Expression {
    pub fn kind(&self) -> ExpressionKind {
        ExpressionKind::from(self)
    }

    /// The static type of the value this node produces
    pub fn ty(&self) -> TypeDesc {
        match self {
            Expression::Binary(e) => e.ty.clone(),
            Expression::Block(e) => e.ty.clone(),
            Expression::Conditional(e) => e.ty.clone(),
            Expression::Constant(e) => e.ty.clone(),
            Expression::DebugInfo(_) => TypeDesc::void(),
            Expression::Default(e) => e.ty.clone(),
            Expression::Dynamic(e) => e.ty.clone(),
            Expression::Goto(e) => e.ty.clone(),
            Expression::Index(e) => e.ty.clone(),
            Expression::Invocation(e) => e.ty.clone(),
            Expression::Label(e) => e.target.ty.clone(),
            Expression::Lambda(e) => e.delegate_type.clone(),
            Expression::ListInit(e) => e.new_expression.ty.clone(),
            Expression::Loop(e) => e
                .break_label
                .as_ref()
                .map_or_else(TypeDesc::void, |label| label.ty.clone()),
            Expression::Member(e) => e.ty.clone(),
            Expression::MemberInit(e) => e.new_expression.ty.clone(),
            Expression::MethodCall(e) => e.method.return_type.clone(),
            Expression::NewArray(e) => e.ty.clone(),
            Expression::New(e) => e.ty.clone(),
            Expression::Parameter(e) => e.ty.clone(),
            Expression::RuntimeVariables(_) => RuntimeVariablesExpression::result_type(),
            Expression::Switch(e) => e.ty.clone(),
            Expression::Try(e) => e.ty.clone(),
            Expression::TypeBinary(_) => TypeDesc::bool(),
            Expression::Unary(e) => e.ty.clone(),
            Expression::Extension(e) => e.ty.clone(),
        }
    }
}

/// Nesting depth past which the textual form prints sub-expressions as `...`
pub const TEXT_DEPTH_LIMIT: usize = 64;

thread_local! {
    static TEXT_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Counts one level of textual nesting for as long as it lives
struct TextLevel;

impl TextLevel {
    fn enter() -> Option<Self> {
        TEXT_DEPTH.with(|depth| {
            if depth.get() >= TEXT_DEPTH_LIMIT {
                None
            } else {
                depth.set(depth.get() + 1);
                Some(TextLevel)
            }
        })
    }
}

impl Drop for TextLevel {
    fn drop(&mut self) {
        TEXT_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

/// The default textual form of a node
///
/// Nesting is capped at [TEXT_DEPTH_LIMIT] levels, so the text of an arbitrarily deep tree
/// stays bounded.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(_level) = TextLevel::enter() else {
            return f.write_str("...");
        };
        match self {
            Expression::Binary(e) => fmt::Display::fmt(e, f),
            Expression::Block(e) => fmt::Display::fmt(e, f),
            Expression::Conditional(e) => fmt::Display::fmt(e, f),
            Expression::Constant(e) => fmt::Display::fmt(e, f),
            Expression::DebugInfo(e) => fmt::Display::fmt(e, f),
            Expression::Default(e) => fmt::Display::fmt(e, f),
            Expression::Dynamic(e) => fmt::Display::fmt(e, f),
            Expression::Goto(e) => fmt::Display::fmt(e, f),
            Expression::Index(e) => fmt::Display::fmt(e, f),
            Expression::Invocation(e) => fmt::Display::fmt(e, f),
            Expression::Label(e) => fmt::Display::fmt(e, f),
            Expression::Lambda(e) => fmt::Display::fmt(e, f),
            Expression::ListInit(e) => fmt::Display::fmt(e, f),
            Expression::Loop(e) => fmt::Display::fmt(e, f),
            Expression::Member(e) => fmt::Display::fmt(e, f),
            Expression::MemberInit(e) => fmt::Display::fmt(e, f),
            Expression::MethodCall(e) => fmt::Display::fmt(e, f),
            Expression::NewArray(e) => fmt::Display::fmt(e, f),
            Expression::New(e) => fmt::Display::fmt(e, f),
            Expression::Parameter(e) => fmt::Display::fmt(e, f),
            Expression::RuntimeVariables(e) => fmt::Display::fmt(e, f),
            Expression::Switch(e) => fmt::Display::fmt(e, f),
            Expression::Try(e) => fmt::Display::fmt(e, f),
            Expression::TypeBinary(e) => fmt::Display::fmt(e, f),
            Expression::Unary(e) => fmt::Display::fmt(e, f),
            Expression::Extension(e) => fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exprviz::ast::Value;
    use strum::IntoEnumIterator;

    #[test]
    fn test_kind_matches_variant() {
        let expr = Expression::constant(1, TypeDesc::int());
        assert_eq!(expr.kind(), ExpressionKind::Constant);
        assert_eq!(expr.kind().to_string(), "Constant");
    }

    #[test]
    fn test_every_kind_is_iterable() {
        assert_eq!(ExpressionKind::iter().count(), 26);
        assert!(ExpressionKind::iter().any(|kind| kind == ExpressionKind::Extension));
    }

    #[test]
    fn test_textual_form_is_depth_capped() {
        let mut chain = Expression::parameter(TypeDesc::int(), "x");
        for _ in 0..TEXT_DEPTH_LIMIT + 10 {
            chain = Expression::unary(UnaryOp::Not, chain, TypeDesc::int());
        }
        let text = chain.to_string();
        assert!(text.starts_with("Not(Not("));
        assert!(text.contains("Not(...)"));
        assert!(!text.contains('x'));
        assert_eq!(text.matches("Not(").count(), TEXT_DEPTH_LIMIT);

        // The cap is per call, nothing leaks into the next rendering
        let shallow = Expression::unary(
            UnaryOp::Not,
            Expression::parameter(TypeDesc::int(), "y"),
            TypeDesc::int(),
        );
        assert_eq!(shallow.to_string(), "Not(y)");
    }

    #[test]
    fn test_textual_forms() {
        let a = Expression::parameter(TypeDesc::int(), "a");
        let b = Expression::parameter(TypeDesc::int(), "b");
        let sum = Expression::make_binary(BinaryOp::Add, a.clone(), b.clone());
        assert_eq!(sum.to_string(), "(a + b)");

        let test = Expression::make_binary(
            BinaryOp::GreaterThan,
            sum,
            Expression::constant(1000, TypeDesc::int()),
        );
        assert_eq!(test.to_string(), "((a + b) > 1000)");

        let lambda = Expression::lambda(
            vec![
                ParameterExpression::new(TypeDesc::int(), "a"),
                ParameterExpression::new(TypeDesc::int(), "b"),
            ],
            test,
        );
        assert_eq!(lambda.to_string(), "(a, b) => ((a + b) > 1000)");

        let convert = Expression::convert(Expression::constant(2, TypeDesc::int()), TypeDesc::long());
        assert_eq!(convert.to_string(), "Convert(2, Int64)");

        assert_eq!(Expression::default(TypeDesc::int()).to_string(), "default(Int32)");
        assert_eq!(
            Expression::constant(Value::Null, TypeDesc::string()).to_string(),
            "null"
        );
    }

    #[test]
    fn test_result_types() {
        let is_int = Expression::type_is(Expression::constant(3, TypeDesc::int()), TypeDesc::int());
        assert_eq!(is_int.ty(), TypeDesc::bool());
        assert_eq!(
            Expression::loop_expr(Expression::constant(1, TypeDesc::int())).ty(),
            TypeDesc::void()
        );
    }
}
