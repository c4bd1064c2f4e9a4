//! # Transform Errors
//!
//! Error types for traversal and transformation.

use thiserror::Error;

/// Errors that can occur while walking the source tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// A node kind has neither a registered handler nor a default descent.
    #[error("unsupported node kind {kind} under {parent}")]
    UnsupportedNodeKind {
        /// Kind of the offending node.
        kind: &'static str,
        /// Kind of its parent.
        parent: &'static str,
    },
}

// =============================================================================
// TESTS
// =============================================================================
