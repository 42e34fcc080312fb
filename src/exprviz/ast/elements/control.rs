//! Control nodes: blocks, conditionals and statement-like expressions
//!
//!     Statement-like nodes (goto, label, loop, switch, try) render their bodies as `...` in
//!     their default textual form; the display tree shows the bodies as children instead.

use super::super::{Expression, TypeDesc};
use super::lambda::ParameterExpression;
use super::write_joined;
use std::fmt;
use strum::{Display, EnumIter};

#[derive(Debug, Clone, PartialEq)]
pub struct BlockExpression {
    pub variables: Vec<ParameterExpression>,
    pub expressions: Vec<Expression>,
    pub ty: TypeDesc,
}

impl fmt::Display for BlockExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for variable in &self.variables {
            write!(f, " var {};", variable)?;
        }
        for expression in &self.expressions {
            write!(f, " {};", expression)?;
        }
        write!(f, " }}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalExpression {
    pub test: Box<Expression>,
    pub if_true: Box<Expression>,
    pub if_false: Box<Expression>,
    pub ty: TypeDesc,
}

impl fmt::Display for ConditionalExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IIF({}, {}, {})", self.test, self.if_true, self.if_false)
    }
}

/// Jump target shared by goto and label nodes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabelTarget {
    pub name: Option<String>,
    pub ty: TypeDesc,
}

impl LabelTarget {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ty: TypeDesc::void(),
        }
    }

    pub fn unnamed(ty: TypeDesc) -> Self {
        Self { name: None, ty }
    }

    pub fn typed(name: impl Into<String>, ty: TypeDesc) -> Self {
        Self {
            name: Some(name.into()),
            ty,
        }
    }
}

impl fmt::Display for LabelTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "UnnamedLabel"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum GotoKind {
    Goto,
    Return,
    Break,
    Continue,
}

impl GotoKind {
    fn keyword(self) -> &'static str {
        match self {
            GotoKind::Goto => "goto",
            GotoKind::Return => "return",
            GotoKind::Break => "break",
            GotoKind::Continue => "continue",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GotoExpression {
    pub kind: GotoKind,
    pub target: LabelTarget,
    pub value: Option<Box<Expression>>,
    pub ty: TypeDesc,
}

impl fmt::Display for GotoExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.keyword(), self.target)?;
        if let Some(value) = &self.value {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelExpression {
    pub target: LabelTarget,
    pub default_value: Option<Box<Expression>>,
}

impl fmt::Display for LabelExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {}:", self.target)?;
        if let Some(default) = &self.default_value {
            write!(f, " {}", default)?;
        }
        write!(f, " }}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoopExpression {
    pub body: Box<Expression>,
    pub break_label: Option<LabelTarget>,
    pub continue_label: Option<LabelTarget>,
}

impl fmt::Display for LoopExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "loop {{ ... }}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    pub test_values: Vec<Expression>,
    pub body: Expression,
}

impl fmt::Display for SwitchCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "case (")?;
        write_joined(f, &self.test_values)?;
        write!(f, "): ...")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchExpression {
    pub switch_value: Box<Expression>,
    pub cases: Vec<SwitchCase>,
    pub default_body: Option<Box<Expression>>,
    pub ty: TypeDesc,
}

impl fmt::Display for SwitchExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "switch ({}) {{ ... }}", self.switch_value)
    }
}

/// One catch handler of a try node
#[derive(Debug, Clone, PartialEq)]
pub struct CatchBlock {
    pub test: TypeDesc,
    pub variable: Option<ParameterExpression>,
    pub filter: Option<Box<Expression>>,
    pub body: Expression,
}

impl fmt::Display for CatchBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.variable {
            Some(variable) => write!(f, "catch ({} {}) {{ ... }}", self.test, variable),
            None => write!(f, "catch ({}) {{ ... }}", self.test),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TryExpression {
    pub body: Box<Expression>,
    pub handlers: Vec<CatchBlock>,
    pub finally: Option<Box<Expression>>,
    pub ty: TypeDesc,
}

impl fmt::Display for TryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "try {{ ... }}")
    }
}
