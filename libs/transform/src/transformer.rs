//! # Transformer
//!
//! Builds the target AST by driving the traverser with a fixed set of
//! handlers. The source tree is only borrowed; every target node is freshly
//! allocated, so the result shares nothing with the input.
//!
//! ## Example
//!
//! ```rust
//! use tiny_transform::target::{Node, Program};
//! use tiny_transform::transform;
//!
//! let source = tiny_parser::parse("(add 2 (subtract 4 2))").unwrap();
//! let target = transform(&source).unwrap();
//! assert_eq!(
//!     target,
//!     Program::new(vec![Node::statement(Node::call(
//!         "add",
//!         vec![
//!             Node::number("2"),
//!             Node::call("subtract", vec![Node::number("4"), Node::number("2")]),
//!         ],
//!     ))])
//! );
//! ```

use crate::error::TransformError;
use crate::target;
use crate::traverser::{traverse, Parent, Visit, Visitor};
use tiny_parser::ast::{CallExpression, Identifier, NumberLiteral, Program};

// =============================================================================
// TRANSFORMER
// =============================================================================

/// Visitor translating source nodes into target nodes.
///
/// Its scope is the target list new siblings are appended to: the program
/// body at top level, a call's argument list below that.
#[derive(Debug, Default, Clone, Copy)]
pub struct Transformer;

impl Visitor for Transformer {
    type Scope = Vec<target::Node>;

    fn visit_number_literal(
        &mut self,
        node: &NumberLiteral,
        _parent: Parent,
        scope: &mut Self::Scope,
    ) -> Result<Visit, TransformError> {
        scope.push(target::Node::number(node.value.as_str()));
        Ok(Visit::Handled)
    }

    fn visit_identifier(
        &mut self,
        node: &Identifier,
        _parent: Parent,
        scope: &mut Self::Scope,
    ) -> Result<Visit, TransformError> {
        scope.push(target::Node::identifier(node.name.as_str()));
        Ok(Visit::Handled)
    }

    fn enter_call_expression(
        &mut self,
        _node: &CallExpression,
        _parent: Parent,
        _scope: &mut Self::Scope,
    ) -> Result<Option<Self::Scope>, TransformError> {
        // Parameters collect into the new call's argument list
        Ok(Some(Vec::new()))
    }

    fn exit_call_expression(
        &mut self,
        node: &CallExpression,
        parent: Parent,
        arguments: Self::Scope,
        scope: &mut Self::Scope,
    ) -> Result<(), TransformError> {
        let call = target::Node::call(node.name.as_str(), arguments);
        if parent.is_call() {
            scope.push(call);
        } else {
            scope.push(target::Node::statement(call));
        }
        Ok(())
    }
}

/// Transform a source program into a target program.
pub fn transform(program: &Program) -> Result<target::Program, TransformError> {
    let mut body = Vec::with_capacity(program.body.len());
    traverse(program, &mut Transformer, &mut body)?;
    Ok(target::Program::new(body))
}

// =============================================================================
// TESTS
// =============================================================================
