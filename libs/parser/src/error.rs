//! # Parse Errors
//!
//! Error types for the parser.
//!
//! ## Example
//!
//! ```rust
//! use tiny_parser::error::ParseError;
//! use tiny_parser::lexer::TokenKind;
//!
//! let error = ParseError::unexpected_token(TokenKind::RightParen, ")", 0);
//! assert!(error.to_string().contains("unexpected"));
//! ```

use crate::lexer::TokenKind;
use thiserror::Error;

// =============================================================================
// PARSE ERROR
// =============================================================================

/// Failures raised while building the source tree.
///
/// Token positions are indices into the token sequence, not source offsets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A node cannot start with this token kind.
    #[error("unexpected token kind {} ('{text}') at token {index}", .kind.display())]
    UnexpectedTokenKind {
        /// Kind of the offending token.
        kind: TokenKind,
        /// Text of the offending token.
        text: String,
        /// Index of the offending token.
        index: usize,
    },

    /// The token sequence ended while a token was still expected.
    #[error("ran out of tokens at token {index}, expected {expected}")]
    OutOfTokens {
        /// Description of what was expected.
        expected: &'static str,
        /// Cursor position when the input ran out.
        index: usize,
    },
}

impl ParseError {
    /// Create unexpected token kind error.
    pub fn unexpected_token(kind: TokenKind, text: &str, index: usize) -> Self {
        Self::UnexpectedTokenKind {
            kind,
            text: text.to_string(),
            index,
        }
    }

    /// Create out of tokens error.
    pub const fn out_of_tokens(expected: &'static str, index: usize) -> Self {
        Self::OutOfTokens { expected, index }
    }
}

// =============================================================================
// TESTS
// =============================================================================
