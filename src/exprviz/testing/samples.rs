//! Named sample expressions
//!
//! Each entry of the table builds a fresh expression. `all` wraps every other sample in a
//! single block, which exercises every node kind in one tree.

use crate::exprviz::ast::elements::*;
use crate::exprviz::ast::{ArrayValue, Expression, Primitive, TypeDesc, TypeKind, Value};

type Builder = fn() -> Expression;

const SAMPLES: &[(&str, Builder)] = &[
    ("binary", binary),
    ("conditional", conditional),
    ("constants", constants),
    ("debug_info", debug_info),
    ("defaults", defaults),
    ("dynamic", dynamic),
    ("goto", goto),
    ("return", return_value),
    ("index_vector", index_vector),
    ("index_matrix", index_matrix),
    ("index_param", index_param),
    ("invocation", invocation),
    ("label", label),
    ("label_default", label_default),
    ("lambda", lambda),
    ("list_init", list_init),
    ("loop", loop_body),
    ("member", member),
    ("member_init", member_init),
    ("method_call", method_call),
    ("new_array", new_array),
    ("new", new_object),
    ("new_anonymous", new_anonymous),
    ("parameter", parameter),
    ("runtime_variables", runtime_variables),
    ("switch", switch),
    ("try_finally", try_finally),
    ("try_catch", try_catch),
    ("type_binary", type_binary),
    ("unary", unary),
    ("all", all),
];

/// Names of every sample, in table order
pub fn sample_names() -> Vec<&'static str> {
    SAMPLES.iter().map(|(name, _)| *name).collect()
}

/// Build the sample with the given name
pub fn sample(name: &str) -> Option<Expression> {
    SAMPLES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, build)| build())
}

fn int(value: i32) -> Expression {
    Expression::constant(value, TypeDesc::int())
}

fn string(value: &str) -> Expression {
    Expression::constant(value, TypeDesc::string())
}

fn car() -> TypeDesc {
    TypeDesc::class("Car")
}

fn write_line(text: &str) -> Expression {
    Expression::call(
        None,
        MethodRef::new(TypeDesc::class("Console"), "WriteLine", TypeDesc::void()),
        vec![string(text)],
    )
}

fn matrix(lengths: Vec<usize>, elements: Vec<i32>) -> Value {
    match ArrayValue::new(lengths, elements) {
        Ok(array) => Value::Array(array),
        Err(_) => Value::Null,
    }
}

pub fn binary() -> Expression {
    Expression::make_binary(BinaryOp::GreaterThan, int(1), int(2))
}

pub fn conditional() -> Expression {
    Expression::condition(
        Expression::constant(true, TypeDesc::bool()),
        string("yes"),
        string("no"),
    )
}

/// Scalars, nulls and arrays of every shape
pub fn constants() -> Expression {
    let int_array = |rank| TypeDesc::int().array_of(rank);
    let nullable_int = TypeDesc::generic("Nullable`1", TypeKind::Struct, vec![TypeDesc::int()]);
    let jagged = ArrayValue::vector([Value::Null, matrix(vec![2, 2], vec![1, 11, 2, 22])]);
    let deep_jagged = TypeDesc::class("Program")
        .array_of(5)
        .array_of(1)
        .array_of(4)
        .array_of(1)
        .array_of(3)
        .array_of(1)
        .array_of(2)
        .array_of(1);

    Expression::block(vec![
        Expression::constant(Value::Null, nullable_int),
        Expression::constant(Value::Null, TypeDesc::string()),
        string("null"),
        string("str"),
        string(" "),
        string("\t"),
        Expression::constant(' ', TypeDesc::char()),
        Expression::constant('\t', TypeDesc::char()),
        Expression::constant(1.5f32, TypeDesc::Primitive(Primitive::Single)),
        Expression::constant(jagged, int_array(2).array_of(1)),
        Expression::constant(ArrayValue::vector(vec![Value::Null; 6]), deep_jagged),
        Expression::constant(ArrayValue::vector([0, 1]), int_array(1)),
        Expression::constant(
            ArrayValue::vector([Value::Null, Value::from("null"), Value::from(" ")]),
            TypeDesc::string().array_of(1),
        ),
        Expression::constant(matrix(vec![2, 3], vec![1, 11, 111, 2, 22, 222]), int_array(2)),
        Expression::constant(
            matrix(vec![2, 2, 2], vec![1, 11, 2, 22, 3, 33, 4, 44]),
            int_array(3),
        ),
        Expression::constant(
            matrix(
                vec![2, 2, 2, 2],
                vec![1, 11, 2, 22, 3, 33, 4, 44, 5, 55, 6, 66, 7, 77, 8, 88],
            ),
            int_array(4),
        ),
    ])
}

pub fn debug_info() -> Expression {
    Expression::debug_info(SymbolDocument::new("debug"), 1, 2, 3, 4)
}

pub fn defaults() -> Expression {
    Expression::block(vec![
        Expression::default(TypeDesc::generic(
            "IEnumerable`1",
            TypeKind::Interface,
            vec![TypeDesc::int()],
        )),
        Expression::default(TypeDesc::generic(
            "Func`1",
            TypeKind::Delegate,
            vec![TypeDesc::int()],
        )),
        Expression::default(TypeDesc::class("Program")),
        Expression::default(TypeDesc::int()),
        Expression::default(TypeDesc::named("DayOfWeek", TypeKind::Enum)),
    ])
}

pub fn dynamic() -> Expression {
    let delegate = TypeDesc::generic(
        "Func`3",
        TypeKind::Delegate,
        vec![TypeDesc::class("CallSite"), TypeDesc::object(), TypeDesc::object()],
    );
    Expression::dynamic(
        "GetMember Id",
        delegate,
        vec![Expression::parameter(TypeDesc::object(), "o")],
    )
}

pub fn goto() -> Expression {
    Expression::goto(LabelTarget::named("label"))
}

pub fn return_value() -> Expression {
    Expression::make_goto(
        GotoKind::Return,
        LabelTarget::unnamed(TypeDesc::void()),
        Some(int(1)),
        TypeDesc::long(),
    )
}

pub fn index_vector() -> Expression {
    let array = Expression::constant(
        ArrayValue::vector([0, 1, 2, 3]),
        TypeDesc::int().array_of(1),
    );
    Expression::array_access(array, vec![int(2)])
}

pub fn index_matrix() -> Expression {
    let array = Expression::constant(
        matrix(vec![2, 4], vec![0, 1, 2, 3, 10, 11, 12, 13]),
        TypeDesc::int().array_of(2),
    );
    Expression::array_access(array, vec![int(1), int(3)])
}

pub fn index_param() -> Expression {
    Expression::array_access(
        Expression::parameter(TypeDesc::int().array_of(1), "Array"),
        vec![Expression::parameter(TypeDesc::int(), "Index")],
    )
}

pub fn invocation() -> Expression {
    Expression::invoke(lambda(), vec![int(10), int(20)])
}

pub fn label() -> Expression {
    Expression::label(LabelTarget::named("label"), None)
}

pub fn label_default() -> Expression {
    Expression::label(
        LabelTarget::typed("labelType", TypeDesc::string()),
        Some(string("str")),
    )
}

/// `(num1, num2) => ((num1 + num2) > 1000)`
pub fn lambda() -> Expression {
    let num1 = ParameterExpression::new(TypeDesc::int(), "num1");
    let num2 = ParameterExpression::new(TypeDesc::int(), "num2");
    let sum = Expression::make_binary(
        BinaryOp::Add,
        Expression::Parameter(num1.clone()),
        Expression::Parameter(num2.clone()),
    );
    let body = Expression::make_binary(BinaryOp::GreaterThan, sum, int(1000));
    Expression::lambda(vec![num1, num2], body)
}

pub fn list_init() -> Expression {
    let dictionary = TypeDesc::generic(
        "Dictionary`2",
        TypeKind::Class,
        vec![TypeDesc::int(), TypeDesc::string()],
    );
    let new_dictionary = NewExpression {
        ty: dictionary,
        arguments: vec![],
        members: None,
    };
    Expression::list_init(
        new_dictionary,
        vec![
            ElementInit::new("Add", vec![int(5), string("maple")]),
            ElementInit::new("Add", vec![int(3), string("oak")]),
        ],
    )
}

pub fn loop_body() -> Expression {
    Expression::loop_expr(int(1))
}

pub fn member() -> Expression {
    Expression::member(
        Some(Expression::constant(Value::object("Car"), car())),
        MemberRef::new(car(), "Name"),
        TypeDesc::string(),
    )
}

pub fn member_init() -> Expression {
    let weight = Expression::parameter(TypeDesc::int(), "weight");
    let height = Expression::parameter(TypeDesc::int(), "height");
    let new_car = NewExpression {
        ty: car(),
        arguments: vec![weight.clone(), height.clone()],
        members: None,
    };
    Expression::member_init(
        new_car,
        vec![
            MemberBinding::assign("Weight", weight),
            MemberBinding::assign("Height", height),
        ],
    )
}

pub fn method_call() -> Expression {
    Expression::call(
        None,
        MethodRef::new(TypeDesc::class("Console"), "Write", TypeDesc::void()),
        vec![string("Hello")],
    )
}

pub fn new_array() -> Expression {
    Expression::new_array_init(
        TypeDesc::string(),
        ["oak", "fir", "spruce", "alder"].into_iter().map(string).collect(),
    )
}

pub fn new_object() -> Expression {
    Expression::new(TypeDesc::int(), vec![])
}

/// `new { Name = "C#", IsSelected = true }`
pub fn new_anonymous() -> Expression {
    Expression::new_with_members(
        TypeDesc::class("<>f__AnonymousType0"),
        vec![string("C#"), Expression::constant(true, TypeDesc::bool())],
        vec!["Name".to_string(), "IsSelected".to_string()],
    )
}

pub fn parameter() -> Expression {
    Expression::parameter(TypeDesc::int(), "a")
}

pub fn runtime_variables() -> Expression {
    Expression::runtime_variables(vec![
        ParameterExpression::new(TypeDesc::int(), "x"),
        ParameterExpression::new(TypeDesc::string(), "name"),
    ])
}

pub fn switch() -> Expression {
    Expression::switch(
        int(1),
        None,
        vec![SwitchCase {
            test_values: vec![int(1)],
            body: write_line("Second"),
        }],
    )
}

pub fn try_finally() -> Expression {
    Expression::try_finally(int(3), write_line("Second"))
}

pub fn try_catch() -> Expression {
    let error = ParameterExpression::new(TypeDesc::class("Exception"), "e");
    Expression::make_try(
        int(3),
        vec![
            CatchBlock {
                test: TypeDesc::class("Exception"),
                variable: Some(error),
                filter: Some(Box::new(Expression::constant(true, TypeDesc::bool()))),
                body: int(0),
            },
            CatchBlock {
                test: TypeDesc::object(),
                variable: None,
                filter: None,
                body: int(-1),
            },
        ],
        None,
    )
}

pub fn type_binary() -> Expression {
    Expression::type_is(int(3), TypeDesc::int())
}

pub fn unary() -> Expression {
    Expression::convert(int(2), TypeDesc::long())
}

/// Every other sample inside one block
pub fn all() -> Expression {
    Expression::block(
        SAMPLES
            .iter()
            .filter(|(name, _)| *name != "all")
            .map(|(_, build)| build())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exprviz::ast::ExpressionKind;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_names_are_unique_and_resolvable() {
        let names = sample_names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
        for name in names {
            assert!(sample(name).is_some(), "{name}");
        }
        assert!(sample("nope").is_none());
    }

    #[test]
    fn test_all_covers_every_closed_kind() {
        let Some(Expression::Block(block)) = sample("all") else {
            panic!("all is a block");
        };
        let mut kinds: HashSet<ExpressionKind> = HashSet::new();
        for expression in &block.expressions {
            kinds.insert(expression.kind());
            if let Expression::Block(inner) = expression {
                kinds.extend(inner.expressions.iter().map(Expression::kind));
            }
        }
        kinds.insert(ExpressionKind::Block);
        for kind in ExpressionKind::iter().filter(|k| *k != ExpressionKind::Extension) {
            assert!(kinds.contains(&kind), "missing {kind}");
        }
    }
}
