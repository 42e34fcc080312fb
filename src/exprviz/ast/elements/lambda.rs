//! Lambdas, parameters and runtime-variable captures

use super::super::{Expression, TypeDesc};
use super::write_joined;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterExpression {
    pub name: Option<String>,
    pub ty: TypeDesc,
    pub by_ref: bool,
}

impl ParameterExpression {
    pub fn new(ty: TypeDesc, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ty,
            by_ref: false,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

impl fmt::Display for ParameterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "Param_0"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LambdaExpression {
    pub name: Option<String>,
    pub parameters: Vec<ParameterExpression>,
    pub body: Box<Expression>,
    pub return_type: TypeDesc,
    /// The delegate type the lambda converts to, e.g. `Func<int, int, bool>`
    pub delegate_type: TypeDesc,
}

impl fmt::Display for LambdaExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parameters.len() == 1 {
            write!(f, "{}", self.parameters[0])?;
        } else {
            write!(f, "(")?;
            write_joined(f, &self.parameters)?;
            write!(f, ")")?;
        }
        write!(f, " => {}", self.body)
    }
}

/// Captures variables so they can be read and written at run time
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeVariablesExpression {
    pub variables: Vec<ParameterExpression>,
}

impl RuntimeVariablesExpression {
    pub fn result_type() -> TypeDesc {
        TypeDesc::interface("IRuntimeVariables")
    }
}

impl fmt::Display for RuntimeVariablesExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        write_joined(f, &self.variables)?;
        write!(f, ")")
    }
}
