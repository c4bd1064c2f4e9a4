//! # Parser
//!
//! Recursive descent parser producing the source AST.
//!
//! The cursor is a field of one `Parser` value; each `parse` call gets its
//! own, so independent parses never share state.
//!
//! ## Example
//!
//! ```rust
//! use tiny_parser::lexer::tokenize;
//! use tiny_parser::parser::Parser;
//!
//! let tokens = tokenize("(add 2 3)");
//! let program = Parser::new(&tokens).parse().unwrap();
//! assert_eq!(program.body.len(), 1);
//! ```

mod call;

use crate::ast::{Node, Program};
use crate::error::ParseError;
use crate::lexer::{Token, TokenKind};
use config::constants::{UnclosedCallPolicy, STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use log::debug;

// =============================================================================
// PARSER
// =============================================================================

/// Recursive descent parser over a token slice.
pub struct Parser<'a> {
    /// Token stream.
    tokens: &'a [Token],
    /// Current token index. Only ever moves forward.
    current: usize,
    /// Handling of a parameter list that never closes.
    unclosed_calls: UnclosedCallPolicy,
}

impl<'a> Parser<'a> {
    /// Create a parser with the default unclosed-call policy.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_policy(tokens, UnclosedCallPolicy::default())
    }

    /// Create a parser with an explicit unclosed-call policy.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use config::constants::UnclosedCallPolicy;
    /// use tiny_parser::lexer::tokenize;
    /// use tiny_parser::parser::Parser;
    ///
    /// let tokens = tokenize("(add 2");
    /// let program = Parser::with_policy(&tokens, UnclosedCallPolicy::Truncate)
    ///     .parse()
    ///     .unwrap();
    /// assert_eq!(program.body.len(), 1);
    /// ```
    pub fn with_policy(tokens: &'a [Token], unclosed_calls: UnclosedCallPolicy) -> Self {
        Self {
            tokens,
            current: 0,
            unclosed_calls,
        }
    }

    /// Parse every token into a program.
    ///
    /// An empty token sequence yields an empty program.
    pub fn parse(mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();

        while !self.is_at_end() {
            match self.walk()? {
                Some(node) => body.push(node),
                None => break,
            }
        }

        Ok(Program::new(body))
    }

    // =========================================================================
    // NODE DISPATCH
    // =========================================================================

    /// Parse one node starting at the cursor.
    ///
    /// Returns `Ok(None)` when the cursor is already past the last token.
    pub(super) fn walk(&mut self) -> Result<Option<Node>, ParseError> {
        stacker::maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            self.walk_inner()
        })
    }

    fn walk_inner(&mut self) -> Result<Option<Node>, ParseError> {
        let index = self.current;
        let Some(token) = self.peek() else {
            return Ok(None);
        };
        debug!("current token {index}: {token:?}");

        match token.kind {
            TokenKind::NumberLiteral => {
                let value = token.text.clone();
                self.advance();
                Ok(Some(Node::number(value)))
            }
            TokenKind::LeftParen => {
                self.advance();
                self.parse_call().map(Some)
            }
            TokenKind::Name => {
                let name = token.text.clone();
                self.advance();
                Ok(Some(Node::identifier(name)))
            }
            TokenKind::RightParen => Err(ParseError::unexpected_token(
                token.kind,
                &token.text,
                index,
            )),
        }
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    /// Get current token, if any.
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.current)
    }

    /// Check if the cursor is past the last token.
    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Advance to next token.
    fn advance(&mut self) {
        self.current += 1;
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse(source: &str) -> Result<Program, ParseError> {
        let tokens = tokenize(source);
        Parser::new(&tokens).parse()
    }

    #[test]
    fn test_parse_empty() {
        let program = parse("").unwrap();
        assert!(program.body.is_empty());
    }

    #[test]
    fn test_parse_bare_number() {
        let program = parse("42").unwrap();
        assert_eq!(program.body, vec![Node::number("42")]);
    }

    #[test]
    fn test_parse_bare_identifier() {
        let program = parse("x").unwrap();
        assert_eq!(program.body, vec![Node::identifier("x")]);
    }

    #[test]
    fn test_parse_multiple_forms() {
        let program = parse("(a 1)(b 2)").unwrap();
        assert_eq!(
            program.body,
            vec![
                Node::call("a", vec![Node::number("1")]),
                Node::call("b", vec![Node::number("2")]),
            ]
        );
    }

    #[test]
    fn test_parse_stray_right_paren() {
        let err = parse(")").unwrap_err();
        assert_eq!(err, ParseError::unexpected_token(TokenKind::RightParen, ")", 0));
    }

    #[test]
    fn test_parse_extra_closing_paren() {
        let err = parse("(a 1))").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedTokenKind { kind: TokenKind::RightParen, index: 4, .. }
        ));
    }

    #[test]
    fn test_parse_from_token_slice() {
        let tokens = vec![
            Token::new(TokenKind::LeftParen, "("),
            Token::new(TokenKind::Name, "f"),
            Token::new(TokenKind::RightParen, ")"),
        ];
        let program = Parser::new(&tokens).parse().unwrap();
        assert_eq!(program.body, vec![Node::call("f", vec![])]);
    }
}
