//! Operator nodes: binary, unary and type tests

use super::super::{Expression, TypeDesc};
use std::fmt;
use strum::{Display, EnumIter};

/// Binary operator kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
    And,
    AndAlso,
    Or,
    OrElse,
    ExclusiveOr,
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LeftShift,
    RightShift,
    Coalesce,
    ArrayIndex,
    Assign,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
            BinaryOp::Power => "**",
            BinaryOp::And => "&",
            BinaryOp::AndAlso => "&&",
            BinaryOp::Or => "|",
            BinaryOp::OrElse => "||",
            BinaryOp::ExclusiveOr => "^",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::LessThan => "<",
            BinaryOp::LessThanOrEqual => "<=",
            BinaryOp::GreaterThan => ">",
            BinaryOp::GreaterThanOrEqual => ">=",
            BinaryOp::LeftShift => "<<",
            BinaryOp::RightShift => ">>",
            BinaryOp::Coalesce => "??",
            BinaryOp::ArrayIndex => "[]",
            BinaryOp::Assign => "=",
        }
    }

    /// Operators whose result is always `bool`
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOp::Equal
                | BinaryOp::NotEqual
                | BinaryOp::LessThan
                | BinaryOp::LessThanOrEqual
                | BinaryOp::GreaterThan
                | BinaryOp::GreaterThanOrEqual
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub op: BinaryOp,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub ty: TypeDesc,
}

impl fmt::Display for BinaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            BinaryOp::ArrayIndex => write!(f, "{}[{}]", self.left, self.right),
            op => write!(f, "({} {} {})", self.left, op.symbol(), self.right),
        }
    }
}

/// Unary operator kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum UnaryOp {
    Negate,
    UnaryPlus,
    Not,
    OnesComplement,
    Convert,
    ConvertChecked,
    TypeAs,
    Quote,
    ArrayLength,
    Increment,
    Decrement,
    Throw,
    Unbox,
    IsTrue,
    IsFalse,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub op: UnaryOp,
    pub operand: Box<Expression>,
    pub ty: TypeDesc,
}

impl fmt::Display for UnaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            UnaryOp::Negate => write!(f, "-{}", self.operand),
            UnaryOp::UnaryPlus => write!(f, "+{}", self.operand),
            UnaryOp::Quote => write!(f, "{}", self.operand),
            UnaryOp::TypeAs => write!(f, "({} As {})", self.operand, self.ty),
            UnaryOp::Convert | UnaryOp::ConvertChecked => {
                write!(f, "{}({}, {})", self.op, self.operand, self.ty)
            }
            op => write!(f, "{}({})", op, self.operand),
        }
    }
}

/// Type test kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum TypeTest {
    TypeIs,
    TypeEqual,
}

/// Tests an expression against a type; the result is always `bool`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeBinaryExpression {
    pub test: TypeTest,
    pub expression: Box<Expression>,
    pub type_operand: TypeDesc,
}

impl fmt::Display for TypeBinaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self.test {
            TypeTest::TypeIs => "Is",
            TypeTest::TypeEqual => "TypeEqual",
        };
        write!(f, "({} {} {})", self.expression, word, self.type_operand)
    }
}
