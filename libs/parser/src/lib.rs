//! # Tiny Parser
//!
//! Lexer and recursive-descent parser for the prefix call language
//! `(add 2 (subtract 4 2))`.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Source AST
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tiny_parser::parse;
//!
//! let program = parse("(add 2 3)").unwrap();
//! assert_eq!(program.body.len(), 1);
//! ```
//!
//! ## Pipeline Integration
//!
//! This crate is the first layer in the pipeline:
//!
//! ```text
//! tiny-parser → tiny-transform → tiny-codegen → tiny-compiler
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

// Re-export public API
pub use ast::{CallExpression, Identifier, Node, NumberLiteral, Program};
pub use error::ParseError;
pub use lexer::{tokenize, Token, TokenKind};

use config::constants::UnclosedCallPolicy;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parse source text into a source AST.
///
/// Unclosed calls are rejected. Use [`parse_with_policy`] to truncate them
/// instead.
///
/// ## Example
///
/// ```rust
/// use tiny_parser::{parse, ParseError};
///
/// assert!(matches!(parse("(add 2"), Err(ParseError::OutOfTokens { .. })));
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    parse_with_policy(source, UnclosedCallPolicy::default())
}

/// Parse source text with an explicit unclosed-call policy.
pub fn parse_with_policy(
    source: &str,
    unclosed_calls: UnclosedCallPolicy,
) -> Result<Program, ParseError> {
    let tokens = tokenize(source);
    parse_tokens(&tokens, unclosed_calls)
}

/// Parse an already tokenized source.
pub fn parse_tokens(
    tokens: &[Token],
    unclosed_calls: UnclosedCallPolicy,
) -> Result<Program, ParseError> {
    parser::Parser::with_policy(tokens, unclosed_calls).parse()
}

// =============================================================================
// TESTS
// =============================================================================
