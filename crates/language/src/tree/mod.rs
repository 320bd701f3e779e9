/// Generic tree projection of the AST.
/// Every variant maps to a node carrying a type name, an optional literal
/// value, an optional operator and ordered children, independent of any
/// textual encoding.

use crate::ast::{Expression, Statement};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenericNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<GenericNode>,
}

impl GenericNode {
    pub fn new(kind: impl Into<String>) -> Self {
        GenericNode {
            kind: kind.into(),
            value: None,
            operator: None,
            children: vec![],
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    pub fn with_children(mut self, children: Vec<GenericNode>) -> Self {
        self.children = children;
        self
    }
}

/// Base capability shared by every AST node.
pub trait Node {
    fn to_generic_tree(&self) -> GenericNode;
}

impl Node for Statement<'_> {
    fn to_generic_tree(&self) -> GenericNode {
        match self {
            Statement::If { condition, body } => GenericNode::new("IfStatement")
                .with_children(vec![condition.to_generic_tree(), body.to_generic_tree()]),
            Statement::Block { statements } => GenericNode::new("BlockStatement")
                .with_children(statements.iter().map(|s| s.to_generic_tree()).collect()),
            Statement::Expression { expression } => GenericNode::new("ExpressionStatement")
                .with_children(vec![expression.to_generic_tree()]),
            Statement::Assignment { name, value } => GenericNode::new("AssignmentStatement")
                .with_value(*name)
                .with_children(vec![value.to_generic_tree()]),
        }
    }
}

impl Node for Expression<'_> {
    fn to_generic_tree(&self) -> GenericNode {
        match self {
            Expression::Identifier(name) => GenericNode::new("Identifier").with_value(*name),
            Expression::NumberLiteral(text) => GenericNode::new("NumberLiteral").with_value(*text),
            Expression::Condition { left, operator, right } => GenericNode::new("Condition")
                .with_operator(operator.symbol())
                .with_children(vec![left.to_generic_tree(), right.to_generic_tree()]),
        }
    }
}

pub fn to_generic_tree(node: &impl Node) -> GenericNode {
    node.to_generic_tree()
}

/// Renders a tree as JSON. `<`, `>` and `&` are written as-is.
pub fn to_json(tree: &GenericNode, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(tree)
    } else {
        serde_json::to_string(tree)
    }
}
