//! Leaf nodes: constants, default values, debug markers and host extensions

use super::super::{TypeDesc, Value};
use crate::exprviz::formats::render_value;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct ConstantExpression {
    pub value: Value,
    pub ty: TypeDesc,
}

impl fmt::Display for ConstantExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_value(&self.value, &self.ty))
    }
}

/// The zero/empty value of a type
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultExpression {
    pub ty: TypeDesc,
}

impl fmt::Display for DefaultExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "default({})", self.ty)
    }
}

/// Source document referenced by debug-info markers
///
/// Language, vendor and document type are identifiers; nil when unknown.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolDocument {
    pub file_name: String,
    pub language: Uuid,
    pub language_vendor: Uuid,
    pub document_type: Uuid,
}

impl SymbolDocument {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            language: Uuid::nil(),
            language_vendor: Uuid::nil(),
            document_type: Uuid::nil(),
        }
    }
}

/// Marks a source span for debuggers; evaluates to nothing
#[derive(Debug, Clone, PartialEq)]
pub struct DebugInfoExpression {
    pub document: SymbolDocument,
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl fmt::Display for DebugInfoExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<DebugInfo({}: {}, {}, {}, {})>",
            self.document.file_name,
            self.start_line,
            self.start_column,
            self.end_line,
            self.end_column
        )
    }
}

/// A node kind outside the known set
///
/// Hosts use it for their own node kinds; it is also where kinds added after this crate
/// was written end up. `text` is the host's textual form of the node.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionExpression {
    pub ty: TypeDesc,
    pub op_kind: Option<String>,
    pub text: String,
}

impl fmt::Display for ExtensionExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
