//! # Tokens
//!
//! Token types produced by the lexer.
//!
//! ## Example
//!
//! ```rust
//! use tiny_parser::lexer::{Token, TokenKind};
//!
//! let token = Token::new(TokenKind::NumberLiteral, "10");
//! assert_eq!(token.kind, TokenKind::NumberLiteral);
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the lexer.
///
/// Immutable once produced; the parser only reads it.
///
/// ## Example
///
/// ```rust
/// use tiny_parser::lexer::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Name, "add");
/// assert_eq!(token.text, "add");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token type.
    pub kind: TokenKind,
    /// Token text exactly as it appeared in the source.
    pub text: String,
}

impl Token {
    /// Create a new token.
    ///
    /// ## Parameters
    ///
    /// - `kind`: Token type
    /// - `text`: Token text
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Check if token is the given kind.
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Run of decimal digits like `42`
    NumberLiteral,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Run of ASCII letters like `add`
    Name,
}

impl TokenKind {
    /// Get display string for error messages.
    pub const fn display(&self) -> &'static str {
        match self {
            Self::NumberLiteral => "number",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Name => "name",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
