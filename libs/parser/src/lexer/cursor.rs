//! # Character Cursor
//!
//! Forward-only reader over the lexer's input. Runs of characters come back
//! as borrowed slices of the source, so names and numbers are never rebuilt
//! char by char.
//!
//! ## Example
//!
//! ```rust
//! use tiny_parser::lexer::Cursor;
//!
//! let mut cursor = Cursor::new("add 2");
//! assert_eq!(cursor.take_while(|c| c.is_ascii_lowercase()), "add");
//! assert_eq!(cursor.advance(), Some(' '));
//! assert_eq!(cursor.take_while(|c| c.is_ascii_digit()), "2");
//! assert_eq!(cursor.peek(), None);
//! ```

// =============================================================================
// CURSOR
// =============================================================================

/// Reader positioned between two characters of the source.
pub struct Cursor<'a> {
    source: &'a str,
    /// Byte index of the next unread character.
    byte: usize,
}

impl<'a> Cursor<'a> {
    /// Start reading at the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        Self { source, byte: 0 }
    }

    /// Next unread character, or `None` once the source is exhausted.
    pub fn peek(&self) -> Option<char> {
        self.source[self.byte..].chars().next()
    }

    /// Consume and return the next character.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.byte += c.len_utf8();
        Some(c)
    }

    /// Consume the longest run of characters matching `predicate`.
    ///
    /// Returns the run as a slice of the source; empty if the next character
    /// does not match.
    pub fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let start = self.byte;
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
        &self.source[start..self.byte]
    }
}

// =============================================================================
// TESTS
// =============================================================================
