//! # Call Parsing
//!
//! Parses `(name arg ...)` once the opening `(` has been consumed.
//!
//! ## Grammar
//!
//! ```text
//! call = "(" token node* ")"
//! ```
//!
//! The token after `(` becomes the call name whatever its kind, so
//! `(1 2)` is a call named `1`.

use super::Parser;
use crate::ast::Node;
use crate::error::ParseError;
use crate::lexer::TokenKind;
use config::constants::UnclosedCallPolicy;
use log::warn;

impl<'a> Parser<'a> {
    /// Parse call name and parameters up to the matching `)`.
    pub(super) fn parse_call(&mut self) -> Result<Node, ParseError> {
        let name = self
            .peek()
            .ok_or_else(|| ParseError::out_of_tokens("call name", self.current))?
            .text
            .clone();
        self.advance();

        let mut parameters = Vec::new();
        loop {
            match self.peek() {
                Some(token) if token.is(TokenKind::RightParen) => {
                    self.advance();
                    break;
                }
                Some(_) => match self.walk()? {
                    Some(node) => parameters.push(node),
                    None => break,
                },
                None => match self.unclosed_calls {
                    UnclosedCallPolicy::Reject => {
                        return Err(ParseError::out_of_tokens("')'", self.current));
                    }
                    UnclosedCallPolicy::Truncate => {
                        warn!(
                            "call '{name}' is missing ')', closing it after {} parameters",
                            parameters.len()
                        );
                        break;
                    }
                },
            }
        }

        Ok(Node::call(name, parameters))
    }
}

// =============================================================================
// TESTS
// =============================================================================
