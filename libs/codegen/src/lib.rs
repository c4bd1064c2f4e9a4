//! # Tiny Codegen
//!
//! Renders the target AST as C-like source text.
//!
//! | Node | Output |
//! |------|--------|
//! | `Program` | statements joined by newlines |
//! | `ExpressionStatement` | expression followed by `;` |
//! | `CallExpression` | `callee(arg, arg)` |
//! | `Identifier` / `NumberLiteral` | text verbatim |
//!
//! ## Example
//!
//! ```rust
//! use tiny_transform::target::{Node, Program};
//!
//! let program = Program::new(vec![Node::statement(Node::call("add", vec![
//!     Node::number("1"),
//!     Node::identifier("x"),
//! ]))]);
//! assert_eq!(tiny_codegen::generate(&program).unwrap(), "add(1, x);");
//! ```

use config::constants::{
    ARGUMENT_SEPARATOR, STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, STATEMENT_SEPARATOR,
    STATEMENT_TERMINATOR,
};
use thiserror::Error;
use tiny_transform::target::{CallExpression, Node, Program};

// =============================================================================
// ERRORS
// =============================================================================

/// Errors that can occur while rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// A node appeared where its kind cannot be rendered.
    #[error("unsupported node kind {kind} in {position} position")]
    UnsupportedNodeKind {
        /// Kind of the offending node.
        kind: &'static str,
        /// Where it appeared.
        position: &'static str,
    },
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Render a whole program.
///
/// Pure: rendering the same tree twice yields the same text.
pub fn generate(program: &Program) -> Result<String, CodegenError> {
    let mut out = String::new();
    for (i, node) in program.body.iter().enumerate() {
        if i > 0 {
            out.push_str(STATEMENT_SEPARATOR);
        }
        write_node(node, &mut out)?;
    }
    Ok(out)
}

/// Render one program-level node.
pub fn generate_node(node: &Node) -> Result<String, CodegenError> {
    let mut out = String::new();
    write_node(node, &mut out)?;
    Ok(out)
}

// =============================================================================
// WRITERS
// =============================================================================

// All writers append to one buffer, so output cost stays linear in depth.

fn write_node(node: &Node, out: &mut String) -> Result<(), CodegenError> {
    match node {
        Node::ExpressionStatement(stmt) => {
            write_expression(&stmt.expression, out)?;
            out.push_str(STATEMENT_TERMINATOR);
            Ok(())
        }
        _ => write_expression(node, out),
    }
}

fn write_expression(node: &Node, out: &mut String) -> Result<(), CodegenError> {
    stacker::maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || match node {
        Node::Identifier(identifier) => {
            out.push_str(&identifier.name);
            Ok(())
        }
        Node::NumberLiteral(literal) => {
            out.push_str(&literal.value);
            Ok(())
        }
        Node::CallExpression(call) => write_call(call, out),
        Node::ExpressionStatement(_) => Err(CodegenError::UnsupportedNodeKind {
            kind: node.kind_name(),
            position: "expression",
        }),
    })
}

fn write_call(call: &CallExpression, out: &mut String) -> Result<(), CodegenError> {
    out.push_str(&call.callee.name);
    out.push('(');
    for (i, argument) in call.arguments.iter().enumerate() {
        if i > 0 {
            out.push_str(ARGUMENT_SEPARATOR);
        }
        write_expression(argument, out)?;
    }
    out.push(')');
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
