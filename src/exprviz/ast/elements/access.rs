//! Access nodes: members, methods, indexers, invocations and dynamic calls

use super::super::{Expression, TypeDesc};
use super::write_joined;
use std::fmt;

/// A field or property, by declaring type and name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberRef {
    pub declaring_type: TypeDesc,
    pub name: String,
}

impl MemberRef {
    pub fn new(declaring_type: TypeDesc, name: impl Into<String>) -> Self {
        Self {
            declaring_type,
            name: name.into(),
        }
    }
}

/// A method, by declaring type, name and return type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodRef {
    pub declaring_type: TypeDesc,
    pub name: String,
    pub return_type: TypeDesc,
}

impl MethodRef {
    pub fn new(declaring_type: TypeDesc, name: impl Into<String>, return_type: TypeDesc) -> Self {
        Self {
            declaring_type,
            name: name.into(),
            return_type,
        }
    }
}

/// Field or property access. Static members have no target expression.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpression {
    pub expression: Option<Box<Expression>>,
    pub member: MemberRef,
    pub ty: TypeDesc,
}

impl fmt::Display for MemberExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expression {
            Some(target) => write!(f, "{}.{}", target, self.member.name),
            None => write!(f, "{}.{}", self.member.declaring_type, self.member.name),
        }
    }
}

/// Method call. Static methods have no target object.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCallExpression {
    pub object: Option<Box<Expression>>,
    pub method: MethodRef,
    pub arguments: Vec<Expression>,
}

impl fmt::Display for MethodCallExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.object {
            Some(object) => write!(f, "{}.{}(", object, self.method.name)?,
            None => write!(f, "{}.{}(", self.method.declaring_type, self.method.name)?,
        }
        write_joined(f, &self.arguments)?;
        write!(f, ")")
    }
}

/// Array element access or indexed property access
#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpression {
    pub object: Box<Expression>,
    /// Name of the indexed property, absent for plain array access
    pub indexer: Option<String>,
    pub arguments: Vec<Expression>,
    pub ty: TypeDesc,
}

impl fmt::Display for IndexExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.indexer {
            Some(indexer) => write!(f, "{}.{}[", self.object, indexer)?,
            None => write!(f, "{}[", self.object)?,
        }
        write_joined(f, &self.arguments)?;
        write!(f, "]")
    }
}

/// Invocation of a delegate or lambda expression
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationExpression {
    pub expression: Box<Expression>,
    pub arguments: Vec<Expression>,
    pub ty: TypeDesc,
}

impl fmt::Display for InvocationExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invoke({}", self.expression)?;
        for argument in &self.arguments {
            write!(f, ", {}", argument)?;
        }
        write!(f, ")")
    }
}

/// Late-bound operation dispatched through a call site binder
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicExpression {
    /// Description of the binder, e.g. `GetMember Id`
    pub binder: String,
    pub delegate_type: TypeDesc,
    pub arguments: Vec<Expression>,
    pub ty: TypeDesc,
}

impl fmt::Display for DynamicExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dynamic {}(", self.binder)?;
        write_joined(f, &self.arguments)?;
        write!(f, ")")
    }
}
