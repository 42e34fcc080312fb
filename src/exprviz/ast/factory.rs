//! Factory methods for building expressions
//!
//!     Hosts usually hand over a ready tree; these constructors exist for hosts that build one
//!     programmatically and for the samples and tests. Where a node's result type follows from
//!     its operands (comparisons, conditionals, blocks, lambdas) it is inferred.

use super::elements::*;
use super::{Expression, TypeDesc, TypeKind, Value};

impl Expression {
    pub fn constant(value: impl Into<Value>, ty: TypeDesc) -> Self {
        Expression::Constant(ConstantExpression {
            value: value.into(),
            ty,
        })
    }

    pub fn parameter(ty: TypeDesc, name: impl Into<String>) -> Self {
        Expression::Parameter(ParameterExpression::new(ty, name))
    }

    /// Binary node with an inferred result type
    pub fn make_binary(op: BinaryOp, left: Expression, right: Expression) -> Self {
        let ty = if op.is_comparison() {
            TypeDesc::bool()
        } else if op == BinaryOp::ArrayIndex {
            let array = left.ty();
            array.element_type().cloned().unwrap_or(array)
        } else {
            left.ty()
        };
        Self::binary(op, left, right, ty)
    }

    pub fn binary(op: BinaryOp, left: Expression, right: Expression, ty: TypeDesc) -> Self {
        Expression::Binary(BinaryExpression {
            op,
            left: Box::new(left),
            right: Box::new(right),
            ty,
        })
    }

    pub fn unary(op: UnaryOp, operand: Expression, ty: TypeDesc) -> Self {
        Expression::Unary(UnaryExpression {
            op,
            operand: Box::new(operand),
            ty,
        })
    }

    pub fn convert(operand: Expression, ty: TypeDesc) -> Self {
        Self::unary(UnaryOp::Convert, operand, ty)
    }

    pub fn type_is(expression: Expression, type_operand: TypeDesc) -> Self {
        Expression::TypeBinary(TypeBinaryExpression {
            test: TypeTest::TypeIs,
            expression: Box::new(expression),
            type_operand,
        })
    }

    pub fn type_equal(expression: Expression, type_operand: TypeDesc) -> Self {
        Expression::TypeBinary(TypeBinaryExpression {
            test: TypeTest::TypeEqual,
            expression: Box::new(expression),
            type_operand,
        })
    }

    /// Block typed after its last expression
    pub fn block(expressions: Vec<Expression>) -> Self {
        Self::block_with_variables(vec![], expressions)
    }

    pub fn block_with_variables(
        variables: Vec<ParameterExpression>,
        expressions: Vec<Expression>,
    ) -> Self {
        let ty = expressions.last().map_or_else(TypeDesc::void, Expression::ty);
        Expression::Block(BlockExpression {
            variables,
            expressions,
            ty,
        })
    }

    /// Conditional typed after its true branch
    pub fn condition(test: Expression, if_true: Expression, if_false: Expression) -> Self {
        let ty = if_true.ty();
        Expression::Conditional(ConditionalExpression {
            test: Box::new(test),
            if_true: Box::new(if_true),
            if_false: Box::new(if_false),
            ty,
        })
    }

    pub fn debug_info(
        document: SymbolDocument,
        start_line: u32,
        start_column: u32,
        end_line: u32,
        end_column: u32,
    ) -> Self {
        Expression::DebugInfo(DebugInfoExpression {
            document,
            start_line,
            start_column,
            end_line,
            end_column,
        })
    }

    pub fn default(ty: TypeDesc) -> Self {
        Expression::Default(DefaultExpression { ty })
    }

    /// Late-bound call; the result is `object`
    pub fn dynamic(
        binder: impl Into<String>,
        delegate_type: TypeDesc,
        arguments: Vec<Expression>,
    ) -> Self {
        Expression::Dynamic(DynamicExpression {
            binder: binder.into(),
            delegate_type,
            arguments,
            ty: TypeDesc::object(),
        })
    }

    pub fn goto(target: LabelTarget) -> Self {
        Self::make_goto(GotoKind::Goto, target, None, TypeDesc::void())
    }

    pub fn make_goto(
        kind: GotoKind,
        target: LabelTarget,
        value: Option<Expression>,
        ty: TypeDesc,
    ) -> Self {
        Expression::Goto(GotoExpression {
            kind,
            target,
            value: value.map(Box::new),
            ty,
        })
    }

    pub fn label(target: LabelTarget, default_value: Option<Expression>) -> Self {
        Expression::Label(LabelExpression {
            target,
            default_value: default_value.map(Box::new),
        })
    }

    /// Array element access, typed after the array's element type
    pub fn array_access(array: Expression, indexes: Vec<Expression>) -> Self {
        let array_type = array.ty();
        let ty = array_type
            .element_type()
            .cloned()
            .unwrap_or_else(TypeDesc::object);
        Expression::Index(IndexExpression {
            object: Box::new(array),
            indexer: None,
            arguments: indexes,
            ty,
        })
    }

    pub fn property_index(
        object: Expression,
        indexer: impl Into<String>,
        arguments: Vec<Expression>,
        ty: TypeDesc,
    ) -> Self {
        Expression::Index(IndexExpression {
            object: Box::new(object),
            indexer: Some(indexer.into()),
            arguments,
            ty,
        })
    }

    /// Invocation typed after the invoked delegate's return type
    pub fn invoke(expression: Expression, arguments: Vec<Expression>) -> Self {
        let ty = match &expression {
            Expression::Lambda(lambda) => lambda.return_type.clone(),
            other => delegate_return_type(&other.ty()),
        };
        Expression::Invocation(InvocationExpression {
            expression: Box::new(expression),
            arguments,
            ty,
        })
    }

    /// Lambda typed as `Func<params.., body>`
    pub fn lambda(parameters: Vec<ParameterExpression>, body: Expression) -> Self {
        let return_type = body.ty();
        let mut arguments: Vec<TypeDesc> = parameters.iter().map(|p| p.ty.clone()).collect();
        arguments.push(return_type.clone());
        let delegate_type = TypeDesc::generic(
            format!("Func`{}", arguments.len()),
            TypeKind::Delegate,
            arguments,
        );
        Expression::Lambda(LambdaExpression {
            name: None,
            parameters,
            body: Box::new(body),
            return_type,
            delegate_type,
        })
    }

    pub fn list_init(new_expression: NewExpression, initializers: Vec<ElementInit>) -> Self {
        Expression::ListInit(ListInitExpression {
            new_expression,
            initializers,
        })
    }

    pub fn loop_expr(body: Expression) -> Self {
        Expression::Loop(LoopExpression {
            body: Box::new(body),
            break_label: None,
            continue_label: None,
        })
    }

    /// Instance or static (`expression` = None) member access
    pub fn member(expression: Option<Expression>, member: MemberRef, ty: TypeDesc) -> Self {
        Expression::Member(MemberExpression {
            expression: expression.map(Box::new),
            member,
            ty,
        })
    }

    pub fn member_init(new_expression: NewExpression, bindings: Vec<MemberBinding>) -> Self {
        Expression::MemberInit(MemberInitExpression {
            new_expression,
            bindings,
        })
    }

    /// Instance or static (`object` = None) method call
    pub fn call(object: Option<Expression>, method: MethodRef, arguments: Vec<Expression>) -> Self {
        Expression::MethodCall(MethodCallExpression {
            object: object.map(Box::new),
            method,
            arguments,
        })
    }

    pub fn new_array_init(element: TypeDesc, expressions: Vec<Expression>) -> Self {
        Expression::NewArray(NewArrayExpression {
            kind: NewArrayKind::Init,
            ty: element.array_of(1),
            expressions,
        })
    }

    pub fn new_array_bounds(element: TypeDesc, bounds: Vec<Expression>) -> Self {
        let rank = bounds.len();
        Expression::NewArray(NewArrayExpression {
            kind: NewArrayKind::Bounds,
            ty: element.array_of(rank),
            expressions: bounds,
        })
    }

    pub fn new(ty: TypeDesc, arguments: Vec<Expression>) -> Self {
        Expression::New(NewExpression {
            ty,
            arguments,
            members: None,
        })
    }

    /// Construction where each argument initializes the member of the same position
    pub fn new_with_members(ty: TypeDesc, arguments: Vec<Expression>, members: Vec<String>) -> Self {
        Expression::New(NewExpression {
            ty,
            arguments,
            members: Some(members),
        })
    }

    pub fn runtime_variables(variables: Vec<ParameterExpression>) -> Self {
        Expression::RuntimeVariables(RuntimeVariablesExpression { variables })
    }

    /// Switch typed after its first case body (void without cases)
    pub fn switch(
        switch_value: Expression,
        default_body: Option<Expression>,
        cases: Vec<SwitchCase>,
    ) -> Self {
        let ty = cases
            .first()
            .map(|case| case.body.ty())
            .or_else(|| default_body.as_ref().map(Expression::ty))
            .unwrap_or_else(TypeDesc::void);
        Expression::Switch(SwitchExpression {
            switch_value: Box::new(switch_value),
            cases,
            default_body: default_body.map(Box::new),
            ty,
        })
    }

    /// Try node typed after its body
    pub fn make_try(body: Expression, handlers: Vec<CatchBlock>, finally: Option<Expression>) -> Self {
        let ty = body.ty();
        Expression::Try(TryExpression {
            body: Box::new(body),
            handlers,
            finally: finally.map(Box::new),
            ty,
        })
    }

    pub fn try_finally(body: Expression, finally: Expression) -> Self {
        Self::make_try(body, vec![], Some(finally))
    }

    pub fn extension(ty: TypeDesc, op_kind: Option<&str>, text: impl Into<String>) -> Self {
        Expression::Extension(ExtensionExpression {
            ty,
            op_kind: op_kind.map(str::to_string),
            text: text.into(),
        })
    }
}

/// Return type of a `Func`-like delegate (its last type argument), else `void`
fn delegate_return_type(delegate: &TypeDesc) -> TypeDesc {
    match delegate {
        TypeDesc::Generic {
            name, arguments, ..
        } if name.starts_with("Func") => arguments.last().cloned().unwrap_or_else(TypeDesc::void),
        _ => TypeDesc::void(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_is_bool() {
        let expr = Expression::make_binary(
            BinaryOp::GreaterThan,
            Expression::constant(1, TypeDesc::int()),
            Expression::constant(2, TypeDesc::int()),
        );
        assert_eq!(expr.ty(), TypeDesc::bool());
    }

    #[test]
    fn test_lambda_delegate_type() {
        let lambda = Expression::lambda(
            vec![ParameterExpression::new(TypeDesc::int(), "x")],
            Expression::constant(true, TypeDesc::bool()),
        );
        assert_eq!(
            lambda.ty(),
            TypeDesc::generic(
                "Func`2",
                TypeKind::Delegate,
                vec![TypeDesc::int(), TypeDesc::bool()]
            )
        );
        let invoked = Expression::invoke(lambda, vec![Expression::constant(1, TypeDesc::int())]);
        assert_eq!(invoked.ty(), TypeDesc::bool());
    }

    #[test]
    fn test_invoke_through_delegate_parameter() {
        let delegate = TypeDesc::generic("Func`1", TypeKind::Delegate, vec![TypeDesc::string()]);
        let invoked = Expression::invoke(Expression::parameter(delegate, "f"), vec![]);
        assert_eq!(invoked.ty(), TypeDesc::string());
    }

    #[test]
    fn test_array_access_type() {
        let array = Expression::parameter(TypeDesc::int().array_of(1), "Array");
        let index = Expression::parameter(TypeDesc::int(), "Index");
        let access = Expression::array_access(array, vec![index]);
        assert_eq!(access.ty(), TypeDesc::int());
        assert_eq!(access.to_string(), "Array[Index]");
    }

    #[test]
    fn test_new_array_bounds_rank() {
        let expr = Expression::new_array_bounds(
            TypeDesc::int(),
            vec![
                Expression::constant(2, TypeDesc::int()),
                Expression::constant(3, TypeDesc::int()),
            ],
        );
        assert_eq!(expr.ty(), TypeDesc::int().array_of(2));
        assert_eq!(expr.to_string(), "new Int32[2, 3]");
    }
}
