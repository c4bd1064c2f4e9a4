//! # Lexer
//!
//! Tokenizes prefix call source like `(add 2 (subtract 4 2))`.
//!
//! Classification is by the current character only:
//!
//! | Character | Token |
//! |-----------|-------|
//! | `(` / `)` | `LeftParen` / `RightParen` |
//! | `0-9` run | `NumberLiteral` |
//! | `a-zA-Z` run | `Name` |
//! | anything else | skipped, no token |
//!
//! ## Example
//!
//! ```rust
//! use tiny_parser::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("(add 2 3)").tokenize();
//! assert_eq!(tokens[0].kind, TokenKind::LeftParen);
//! assert_eq!(tokens.len(), 5);
//! ```

mod token;
mod cursor;

pub use token::{Token, TokenKind};
pub use cursor::Cursor;

// =============================================================================
// LEXER
// =============================================================================

/// Prefix call lexer.
///
/// Converts source text into a flat sequence of tokens. Unrecognized
/// characters (whitespace, commas, other punctuation, non-ASCII) never
/// produce an error; they are stepped over.
pub struct Lexer<'a> {
    /// Character cursor over the trimmed source.
    cursor: Cursor<'a>,
    /// Collected tokens.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for source text.
    ///
    /// Leading and trailing whitespace is trimmed before scanning.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source.trim()),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// ## Returns
    ///
    /// Tokens in source order. Empty when the source holds no digits,
    /// letters or parentheses. There is no end-of-file token.
    pub fn tokenize(mut self) -> Vec<Token> {
        while let Some(c) = self.cursor.peek() {
            self.scan_token(c);
        }
        self.tokens
    }

    /// Scan a single token starting at `c`, or skip `c`.
    fn scan_token(&mut self, c: char) {
        match c {
            '(' => {
                self.cursor.advance();
                self.tokens.push(Token::new(TokenKind::LeftParen, "("));
            }
            ')' => {
                self.cursor.advance();
                self.tokens.push(Token::new(TokenKind::RightParen, ")"));
            }
            '0'..='9' => {
                let text = self.cursor.take_while(|c| c.is_ascii_digit());
                self.tokens.push(Token::new(TokenKind::NumberLiteral, text));
            }
            'a'..='z' | 'A'..='Z' => {
                let text = self.cursor.take_while(|c| c.is_ascii_alphabetic());
                self.tokens.push(Token::new(TokenKind::Name, text));
            }
            _ => {
                self.cursor.advance();
            }
        }
    }
}

/// Tokenize `source` in one call.
///
/// ## Example
///
/// ```rust
/// use tiny_parser::lexer::tokenize;
///
/// assert!(tokenize("  , ; ").is_empty());
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_tokenize_nested_call() {
        let tokens = tokenize("(add 2 (subtract 4 2))");

        // ( add 2 ( subtract 4 2 ) ) = 9 tokens
        assert_eq!(tokens.len(), 9);
        assert_eq!(tokens[0], Token::new(TokenKind::LeftParen, "("));
        assert_eq!(tokens[1], Token::new(TokenKind::Name, "add"));
        assert_eq!(tokens[2], Token::new(TokenKind::NumberLiteral, "2"));
        assert_eq!(tokens[3], Token::new(TokenKind::LeftParen, "("));
        assert_eq!(tokens[4], Token::new(TokenKind::Name, "subtract"));
        assert_eq!(tokens[7], Token::new(TokenKind::RightParen, ")"));
        assert_eq!(tokens[8], Token::new(TokenKind::RightParen, ")"));
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn test_tokenize_multi_digit_number() {
        let tokens = tokenize("1234");
        assert_eq!(tokens, vec![Token::new(TokenKind::NumberLiteral, "1234")]);
    }

    #[test]
    fn test_tokenize_mixed_case_name() {
        let tokens = tokenize("AddAll");
        assert_eq!(tokens, vec![Token::new(TokenKind::Name, "AddAll")]);
    }

    #[test]
    fn test_tokenize_letters_then_digits_split() {
        // Names are letters only, so `abc123` is two tokens
        let tokens = tokenize("abc123");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Name, "abc"),
                Token::new(TokenKind::NumberLiteral, "123"),
            ]
        );
    }

    #[test]
    fn test_tokenize_skips_unrecognized() {
        assert_eq!(kinds("(add 2, 3)"), kinds("(add 2 3)"));
        assert_eq!(kinds("-_+*é"), Vec::<TokenKind>::new());
    }

    #[test]
    fn test_tokenize_negative_number_is_unsigned() {
        assert_eq!(tokenize("-5"), vec![Token::new(TokenKind::NumberLiteral, "5")]);
    }

    #[test]
    fn test_tokenize_float_splits() {
        assert_eq!(
            kinds("3.14"),
            vec![TokenKind::NumberLiteral, TokenKind::NumberLiteral]
        );
    }

    #[test]
    fn test_tokenize_adjacent_parens() {
        assert_eq!(
            kinds("(a 1)(b 2)"),
            vec![
                TokenKind::LeftParen,
                TokenKind::Name,
                TokenKind::NumberLiteral,
                TokenKind::RightParen,
                TokenKind::LeftParen,
                TokenKind::Name,
                TokenKind::NumberLiteral,
                TokenKind::RightParen,
            ]
        );
    }
}
