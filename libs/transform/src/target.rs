//! # Target AST
//!
//! C-like tree built by the transformer. Unlike the source tree, a call's
//! callee is an identifier node, and top-level calls are wrapped in an
//! expression statement while nested calls stay bare.
//!
//! ```text
//! Program
//! └── ExpressionStatement
//!     └── CallExpression add
//!         ├── NumberLiteral 2
//!         └── CallExpression subtract
//!             ├── NumberLiteral 4
//!             └── NumberLiteral 2
//! ```

use serde::{Deserialize, Serialize};

pub use tiny_parser::ast::{Identifier, NumberLiteral};

// =============================================================================
// PROGRAM
// =============================================================================

/// Root of the target tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Statements in source order.
    pub body: Vec<Node>,
}

impl Program {
    /// Create a program from its statements.
    pub fn new(body: Vec<Node>) -> Self {
        Self { body }
    }
}

// =============================================================================
// NODES
// =============================================================================

/// A node in the target tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Top-level expression followed by `;`.
    ExpressionStatement(ExpressionStatement),
    /// `callee(arguments...)`.
    CallExpression(CallExpression),
    /// Bare name.
    Identifier(Identifier),
    /// Unparsed decimal digits.
    NumberLiteral(NumberLiteral),
}

impl Node {
    /// Build a number literal node.
    pub fn number(value: impl Into<String>) -> Self {
        Node::NumberLiteral(NumberLiteral {
            value: value.into(),
        })
    }

    /// Build an identifier node.
    pub fn identifier(name: impl Into<String>) -> Self {
        Node::Identifier(Identifier { name: name.into() })
    }

    /// Build a bare call node.
    pub fn call(callee: impl Into<String>, arguments: Vec<Node>) -> Self {
        Node::CallExpression(CallExpression {
            callee: Identifier {
                name: callee.into(),
            },
            arguments,
        })
    }

    /// Wrap an expression in a statement.
    pub fn statement(expression: Node) -> Self {
        Node::ExpressionStatement(ExpressionStatement {
            expression: Box::new(expression),
        })
    }

    /// Node kind name used in diagnostics.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Node::ExpressionStatement(_) => "ExpressionStatement",
            Node::CallExpression(_) => "CallExpression",
            Node::Identifier(_) => "Identifier",
            Node::NumberLiteral(_) => "NumberLiteral",
        }
    }
}

/// Expression used as a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionStatement {
    /// Wrapped expression.
    pub expression: Box<Node>,
}

/// Call with an identifier callee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallExpression {
    /// Called name.
    pub callee: Identifier,
    /// Arguments in source order.
    pub arguments: Vec<Node>,
}

impl Drop for CallExpression {
    // Free nested calls from a worklist so deep trees don't overflow the stack
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.arguments);
        while let Some(node) = pending.pop() {
            match node {
                Node::CallExpression(mut call) => pending.append(&mut call.arguments),
                Node::ExpressionStatement(stmt) => pending.push(*stmt.expression),
                Node::Identifier(_) | Node::NumberLiteral(_) => {}
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
