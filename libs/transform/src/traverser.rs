//! # Traverser
//!
//! Depth-first, pre-order walk over the source AST.
//!
//! Dispatch has two explicit parts:
//!
//! - **Handlers**: the [`Visitor`] methods. Each one reports whether it
//!   handled its node.
//! - **Default descent**: [`descend_program`] and [`descend_call`], used for
//!   composite nodes no handler claimed. Number literals default to a no-op;
//!   identifiers have no default and fail with `UnsupportedNodeKind`.
//!
//! Every handler receives a `Scope`, the accumulator its output goes into.
//! A call handler may open a fresh scope for the call's parameters; the
//! parameters are walked into it and it is handed back on exit.
//!
//! ## Example
//!
//! ```rust
//! use tiny_parser::ast::CallExpression;
//! use tiny_transform::error::TransformError;
//! use tiny_transform::traverser::{traverse, Parent, Visitor};
//!
//! struct Names;
//!
//! impl Visitor for Names {
//!     type Scope = Vec<String>;
//!
//!     fn enter_call_expression(
//!         &mut self,
//!         node: &CallExpression,
//!         _parent: Parent,
//!         scope: &mut Vec<String>,
//!     ) -> Result<Option<Vec<String>>, TransformError> {
//!         scope.push(node.name.clone());
//!         Ok(None)
//!     }
//! }
//!
//! let program = tiny_parser::parse("(add 2 (subtract 4 2))").unwrap();
//! let mut names = Vec::new();
//! traverse(&program, &mut Names, &mut names).unwrap();
//! assert_eq!(names, ["add", "subtract"]);
//! ```

use crate::error::TransformError;
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use log::trace;
use tiny_parser::ast::{CallExpression, Identifier, Node, NumberLiteral, Program};

// =============================================================================
// PARENT
// =============================================================================

/// Kind of the node whose child list is being walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    /// Child is a top-level form.
    Program,
    /// Child is a call parameter.
    CallExpression,
}

impl Parent {
    /// Check if the parent is a call.
    pub const fn is_call(&self) -> bool {
        matches!(self, Parent::CallExpression)
    }

    /// Parent kind name used in diagnostics.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Parent::Program => "Program",
            Parent::CallExpression => "CallExpression",
        }
    }
}

// =============================================================================
// VISITOR
// =============================================================================

/// Outcome of a leaf handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// The handler dealt with the node.
    Handled,
    /// No handler; apply the default for this kind.
    Default,
}

/// Per-kind handlers invoked by [`traverse`].
///
/// Every method defaults to "not handled".
pub trait Visitor {
    /// Accumulator handlers append their output to.
    type Scope;

    /// Handle a number literal.
    fn visit_number_literal(
        &mut self,
        _node: &NumberLiteral,
        _parent: Parent,
        _scope: &mut Self::Scope,
    ) -> Result<Visit, TransformError> {
        Ok(Visit::Default)
    }

    /// Handle an identifier.
    fn visit_identifier(
        &mut self,
        _node: &Identifier,
        _parent: Parent,
        _scope: &mut Self::Scope,
    ) -> Result<Visit, TransformError> {
        Ok(Visit::Default)
    }

    /// Handle a call before its parameters are walked.
    ///
    /// Return `Some(scope)` to claim the call and collect its parameters in
    /// that scope; [`Visitor::exit_call_expression`] then receives it.
    /// Return `None` to leave the call to the default descent, which walks
    /// the parameters into the current scope.
    fn enter_call_expression(
        &mut self,
        _node: &CallExpression,
        _parent: Parent,
        _scope: &mut Self::Scope,
    ) -> Result<Option<Self::Scope>, TransformError> {
        Ok(None)
    }

    /// Finish a call claimed by [`Visitor::enter_call_expression`].
    fn exit_call_expression(
        &mut self,
        _node: &CallExpression,
        _parent: Parent,
        _children: Self::Scope,
        _scope: &mut Self::Scope,
    ) -> Result<(), TransformError> {
        Ok(())
    }
}

// =============================================================================
// TRAVERSAL
// =============================================================================

/// Walk `program` depth-first, dispatching each node to `visitor`.
pub fn traverse<V: Visitor>(
    program: &Program,
    visitor: &mut V,
    scope: &mut V::Scope,
) -> Result<(), TransformError> {
    descend_program(program, visitor, scope)
}

/// Default descent for a program: walk each top-level form.
pub fn descend_program<V: Visitor>(
    program: &Program,
    visitor: &mut V,
    scope: &mut V::Scope,
) -> Result<(), TransformError> {
    program
        .body
        .iter()
        .try_for_each(|node| traverse_node(node, Parent::Program, visitor, scope))
}

/// Default descent for a call: walk each parameter.
///
/// The source callee is a bare name, so there is no callee node to visit.
pub fn descend_call<V: Visitor>(
    call: &CallExpression,
    visitor: &mut V,
    scope: &mut V::Scope,
) -> Result<(), TransformError> {
    call.parameters
        .iter()
        .try_for_each(|node| traverse_node(node, Parent::CallExpression, visitor, scope))
}

fn traverse_node<V: Visitor>(
    node: &Node,
    parent: Parent,
    visitor: &mut V,
    scope: &mut V::Scope,
) -> Result<(), TransformError> {
    stacker::maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
        trace!("visiting {} under {}", node.kind_name(), parent.kind_name());
        match node {
            Node::NumberLiteral(literal) => {
                // Leaf: the default is a no-op
                visitor.visit_number_literal(literal, parent, scope)?;
                Ok(())
            }
            Node::Identifier(identifier) => {
                match visitor.visit_identifier(identifier, parent, scope)? {
                    Visit::Handled => Ok(()),
                    Visit::Default => Err(TransformError::UnsupportedNodeKind {
                        kind: node.kind_name(),
                        parent: parent.kind_name(),
                    }),
                }
            }
            Node::CallExpression(call) => match visitor.enter_call_expression(call, parent, scope)? {
                Some(mut children) => {
                    descend_call(call, visitor, &mut children)?;
                    visitor.exit_call_expression(call, parent, children, scope)
                }
                None => descend_call(call, visitor, scope),
            },
        }
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every node it sees, handling nothing structurally.
    #[derive(Default)]
    struct Recorder;

    impl Visitor for Recorder {
        type Scope = Vec<String>;

        fn visit_number_literal(
            &mut self,
            node: &NumberLiteral,
            parent: Parent,
            scope: &mut Vec<String>,
        ) -> Result<Visit, TransformError> {
            scope.push(format!("{}<{}", node.value, parent.kind_name()));
            Ok(Visit::Handled)
        }

        fn visit_identifier(
            &mut self,
            node: &Identifier,
            parent: Parent,
            scope: &mut Vec<String>,
        ) -> Result<Visit, TransformError> {
            scope.push(format!("{}<{}", node.name, parent.kind_name()));
            Ok(Visit::Handled)
        }

        fn enter_call_expression(
            &mut self,
            node: &CallExpression,
            parent: Parent,
            scope: &mut Vec<String>,
        ) -> Result<Option<Vec<String>>, TransformError> {
            scope.push(format!("{}<{}", node.name, parent.kind_name()));
            Ok(None)
        }
    }

    /// Claims calls and nests their children in brackets.
    struct Bracketer;

    impl Visitor for Bracketer {
        type Scope = String;

        fn visit_number_literal(
            &mut self,
            node: &NumberLiteral,
            _parent: Parent,
            scope: &mut String,
        ) -> Result<Visit, TransformError> {
            scope.push_str(&node.value);
            Ok(Visit::Handled)
        }

        fn enter_call_expression(
            &mut self,
            _node: &CallExpression,
            _parent: Parent,
            _scope: &mut String,
        ) -> Result<Option<String>, TransformError> {
            Ok(Some(String::new()))
        }

        fn exit_call_expression(
            &mut self,
            node: &CallExpression,
            _parent: Parent,
            children: String,
            scope: &mut String,
        ) -> Result<(), TransformError> {
            scope.push_str(&format!("{}[{}]", node.name, children));
            Ok(())
        }
    }

    /// Registers nothing.
    struct Silent;

    impl Visitor for Silent {
        type Scope = ();
    }

    fn program(source: &str) -> Program {
        tiny_parser::parse(source).unwrap()
    }

    #[test]
    fn test_preorder_with_parents() {
        let mut seen = Vec::new();
        traverse(&program("(add 2 (subtract x 2))"), &mut Recorder, &mut seen).unwrap();
        assert_eq!(
            seen,
            [
                "add<Program",
                "2<CallExpression",
                "subtract<CallExpression",
                "x<CallExpression",
                "2<CallExpression",
            ]
        );
    }

    #[test]
    fn test_claimed_call_gets_own_scope() {
        let mut out = String::new();
        traverse(&program("(a 1 (b 2 3))(c)"), &mut Bracketer, &mut out).unwrap();
        assert_eq!(out, "a[1b[23]]c[]");
    }

    #[test]
    fn test_default_descent_without_handlers() {
        traverse(&program("(a 1 (b 2))"), &mut Silent, &mut ()).unwrap();
    }

    #[test]
    fn test_identifier_without_handler_fails() {
        let err = traverse(&program("(print x)"), &mut Silent, &mut ()).unwrap_err();
        assert_eq!(
            err,
            TransformError::UnsupportedNodeKind {
                kind: "Identifier",
                parent: "CallExpression",
            }
        );
    }

    /// Collects the parent kinds it is handed; `Parent` is `'static`.
    struct ParentLog;

    impl Visitor for ParentLog {
        type Scope = Vec<Parent>;

        fn visit_number_literal(
            &mut self,
            _node: &NumberLiteral,
            parent: Parent,
            scope: &mut Vec<Parent>,
        ) -> Result<Visit, TransformError> {
            scope.push(parent);
            Ok(Visit::Handled)
        }

        fn enter_call_expression(
            &mut self,
            _node: &CallExpression,
            parent: Parent,
            scope: &mut Vec<Parent>,
        ) -> Result<Option<Vec<Parent>>, TransformError> {
            scope.push(parent);
            Ok(None)
        }
    }

    #[test]
    fn test_parent_outlives_traversal() {
        let mut parents = Vec::new();
        {
            let source = program("(f 1 (g 2))");
            traverse(&source, &mut ParentLog, &mut parents).unwrap();
        }
        assert_eq!(
            parents,
            [
                Parent::Program,
                Parent::CallExpression,
                Parent::CallExpression,
                Parent::CallExpression,
            ]
        );
        assert!(!parents[0].is_call());
        assert!(parents[1].is_call());
    }

    #[test]
    fn test_top_level_identifier_without_handler_fails() {
        let err = traverse(&program("x"), &mut Silent, &mut ()).unwrap_err();
        assert_eq!(
            err,
            TransformError::UnsupportedNodeKind {
                kind: "Identifier",
                parent: "Program",
            }
        );
    }

    #[test]
    fn test_empty_program() {
        let mut seen = Vec::new();
        traverse(&Program::default(), &mut Recorder, &mut seen).unwrap();
        assert!(seen.is_empty());
    }
}
