//! # Source AST
//!
//! Tree produced by the parser. Calls keep their callee as the bare text of
//! the token that followed `(`; the transformer later promotes it to an
//! identifier node.
//!
//! ## Example
//!
//! ```rust
//! use tiny_parser::ast::{Node, Program};
//!
//! let program = tiny_parser::parse("(add 2 3)").unwrap();
//! assert_eq!(
//!     program,
//!     Program::new(vec![Node::call("add", vec![Node::number("2"), Node::number("3")])])
//! );
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// PROGRAM
// =============================================================================

/// Root of the source tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Top-level forms in source order.
    pub body: Vec<Node>,
}

impl Program {
    /// Create a program from its top-level forms.
    pub fn new(body: Vec<Node>) -> Self {
        Self { body }
    }

    /// Check if the program has no forms.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

// =============================================================================
// NODES
// =============================================================================

/// A node in the source tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Decimal digits, kept as text.
    NumberLiteral(NumberLiteral),
    /// Bare name used as an argument.
    Identifier(Identifier),
    /// Parenthesized call.
    CallExpression(CallExpression),
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

    /// Build a call node.
    pub fn call(name: impl Into<String>, parameters: Vec<Node>) -> Self {
        Node::CallExpression(CallExpression {
            name: name.into(),
            parameters,
        })
    }

    /// Node kind name used in diagnostics.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Node::NumberLiteral(_) => "NumberLiteral",
            Node::Identifier(_) => "Identifier",
            Node::CallExpression(_) => "CallExpression",
        }
    }
}

/// Numeric literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLiteral {
    /// Unparsed decimal digits.
    pub value: String,
}

/// Identifier used as a call argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    /// Identifier text.
    pub name: String,
}

/// Call parsed from one matched `(` ... `)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallExpression {
    /// Text of the token right after `(`, whatever its kind.
    pub name: String,
    /// Arguments in source order.
    pub parameters: Vec<Node>,
}

impl Drop for CallExpression {
    // Free nested calls from a worklist so deep trees don't overflow the stack
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.parameters);
        while let Some(node) = pending.pop() {
            if let Node::CallExpression(mut call) = node {
                pending.append(&mut call.parameters);
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
