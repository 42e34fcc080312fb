//! Construction nodes: objects, arrays and initializers

use super::super::{Expression, TypeDesc};
use super::write_joined;
use std::fmt;
use strum::{Display, EnumIter};

/// Constructor call
///
/// `members` is present when each argument initializes a named member, as in the
/// construction of an anonymous type; it then has one entry per argument.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpression {
    pub ty: TypeDesc,
    pub arguments: Vec<Expression>,
    pub members: Option<Vec<String>>,
}

impl NewExpression {
    /// Member name initialized by the argument at `index`, if members are known
    pub fn member_name(&self, index: usize) -> Option<&str> {
        self.members
            .as_ref()
            .and_then(|members| members.get(index))
            .map(String::as_str)
    }
}

impl fmt::Display for NewExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "new {}(", self.ty)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match self.member_name(i) {
                Some(member) => write!(f, "{} = {}", member, argument)?,
                None => write!(f, "{}", argument)?,
            }
        }
        write!(f, ")")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum NewArrayKind {
    /// `new [] { a, b }`: expressions are the elements
    Init,
    /// `new T[a, b]`: expressions are the dimension bounds
    Bounds,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewArrayExpression {
    pub kind: NewArrayKind,
    /// The array type being created
    pub ty: TypeDesc,
    pub expressions: Vec<Expression>,
}

impl fmt::Display for NewArrayExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NewArrayKind::Init => {
                write!(f, "new [] {{")?;
                write_joined(f, &self.expressions)?;
                write!(f, "}}")
            }
            NewArrayKind::Bounds => {
                let element = self.ty.element_type().unwrap_or(&self.ty);
                write!(f, "new {}[", element)?;
                write_joined(f, &self.expressions)?;
                write!(f, "]")
            }
        }
    }
}

/// One collection initializer entry: an add method and its arguments
#[derive(Debug, Clone, PartialEq)]
pub struct ElementInit {
    pub add_method: String,
    pub arguments: Vec<Expression>,
}

impl ElementInit {
    pub fn new(add_method: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Self {
            add_method: add_method.into(),
            arguments,
        }
    }
}

impl fmt::Display for ElementInit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.add_method)?;
        write_joined(f, &self.arguments)?;
        write!(f, ")")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListInitExpression {
    pub new_expression: NewExpression,
    pub initializers: Vec<ElementInit>,
}

impl fmt::Display for ListInitExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.new_expression)?;
        write_joined(f, &self.initializers)?;
        write!(f, "}}")
    }
}

/// Member initializer inside a member-init node
#[derive(Debug, Clone, PartialEq)]
pub enum MemberBinding {
    /// `Member = expression`
    Assignment {
        member: String,
        expression: Expression,
    },
    /// `Member = { Add(..), .. }`
    List {
        member: String,
        initializers: Vec<ElementInit>,
    },
    /// `Member = { Nested = .. }`
    Nested {
        member: String,
        bindings: Vec<MemberBinding>,
    },
}

impl MemberBinding {
    pub fn assign(member: impl Into<String>, expression: Expression) -> Self {
        MemberBinding::Assignment {
            member: member.into(),
            expression,
        }
    }

    pub fn member(&self) -> &str {
        match self {
            MemberBinding::Assignment { member, .. }
            | MemberBinding::List { member, .. }
            | MemberBinding::Nested { member, .. } => member,
        }
    }
}

impl fmt::Display for MemberBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberBinding::Assignment { member, expression } => {
                write!(f, "{} = {}", member, expression)
            }
            MemberBinding::List {
                member,
                initializers,
            } => {
                write!(f, "{} = {{", member)?;
                write_joined(f, initializers)?;
                write!(f, "}}")
            }
            MemberBinding::Nested { member, bindings } => {
                write!(f, "{} = {{", member)?;
                write_joined(f, bindings)?;
                write!(f, "}}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberInitExpression {
    pub new_expression: NewExpression,
    pub bindings: Vec<MemberBinding>,
}

impl fmt::Display for MemberInitExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.new_expression)?;
        write_joined(f, &self.bindings)?;
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_text() {
        let binding = MemberBinding::List {
            member: "Items".to_string(),
            initializers: vec![ElementInit::new(
                "Add",
                vec![Expression::constant(1, TypeDesc::int())],
            )],
        };
        assert_eq!(binding.to_string(), "Items = {Add(1)}");
        assert_eq!(binding.member(), "Items");

        let nested = MemberBinding::Nested {
            member: "Engine".to_string(),
            bindings: vec![MemberBinding::assign(
                "Power",
                Expression::constant(3, TypeDesc::int()),
            )],
        };
        assert_eq!(nested.to_string(), "Engine = {Power = 3}");
    }

    #[test]
    fn test_anonymous_new_text() {
        let new = NewExpression {
            ty: TypeDesc::class("<>f__AnonymousType0`2"),
            arguments: vec![
                Expression::constant("C#", TypeDesc::string()),
                Expression::constant(true, TypeDesc::bool()),
            ],
            members: Some(vec!["Name".to_string(), "IsSelected".to_string()]),
        };
        assert_eq!(
            new.to_string(),
            "new <>f__AnonymousType0`2(Name = \"C#\", IsSelected = True)"
        );
        assert_eq!(new.member_name(1), Some("IsSelected"));
        assert_eq!(new.member_name(2), None);
    }
}
