//! # Compile Errors
//!
//! The first failure of any stage, surfaced unchanged.

use thiserror::Error;
use tiny_codegen::CodegenError;
use tiny_parser::ParseError;
use tiny_transform::TransformError;

/// Errors that can abort a compile call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// Parser failure.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Traversal failure.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// Rendering failure.
    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_transparent() {
        let inner = ParseError::out_of_tokens("')'", 3);
        let err = CompileError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
    }
}
