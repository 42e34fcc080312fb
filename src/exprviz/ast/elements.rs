//! Expression node records
//!
//!     Every variant of [Expression](super::Expression) wraps one record from this module.
//!     Records are grouped by family:
//!
//!         - [operators]: binary, unary and type-test nodes.
//!         - [control]: blocks, conditionals and the statement-like nodes (goto, label, loop,
//!           switch, try).
//!         - [access]: member access, method calls, indexing, invocation and dynamic calls.
//!         - [construction]: object and array creation, list and member initializers.
//!         - [lambda]: lambdas, parameters and runtime-variable captures.
//!         - [leaves]: constants, default values, debug markers and host extensions.
//!
//!     Optional structural fields (a goto's value, a label's default, a try's finally, a
//!     catch filter) are `Option<Box<Expression>>`. The builder treats the absent and present
//!     arms alike, so the shape of the display tree does not depend on which one occurs.
//!
//!     Each record implements `fmt::Display` with its default textual form. These are best
//!     effort, one-line renderings meant for tooltips, not source code.

pub mod access;
pub mod construction;
pub mod control;
pub mod lambda;
pub mod leaves;
pub mod operators;

pub use access::{
    DynamicExpression, IndexExpression, InvocationExpression, MemberExpression, MemberRef,
    MethodCallExpression, MethodRef,
};
pub use construction::{
    ElementInit, ListInitExpression, MemberBinding, MemberInitExpression, NewArrayExpression,
    NewArrayKind, NewExpression,
};
pub use control::{
    BlockExpression, CatchBlock, ConditionalExpression, GotoExpression, GotoKind,
    LabelExpression, LabelTarget, LoopExpression, SwitchCase, SwitchExpression, TryExpression,
};
pub use lambda::{LambdaExpression, ParameterExpression, RuntimeVariablesExpression};
pub use leaves::{
    ConstantExpression, DebugInfoExpression, DefaultExpression, ExtensionExpression,
    SymbolDocument,
};
pub use operators::{
    BinaryExpression, BinaryOp, TypeBinaryExpression, TypeTest, UnaryExpression, UnaryOp,
};

use std::fmt;

/// Write `items` separated by `", "`
pub(crate) fn write_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
