//! Read position over the input bytes.
//!
//! The cursor only moves forward. It borrows the input for the duration of
//! one parse call and is dropped with it.

use super::options::WhitespaceSet;

/// Forward-only scan position over an immutable input.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    whitespace: WhitespaceSet,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`.
    pub fn new(input: &'a [u8], whitespace: WhitespaceSet) -> Self {
        Self {
            input,
            pos: 0,
            whitespace,
        }
    }

    /// Get the current byte offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns true when every byte has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Peek at the current byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Peek `offset` bytes past the current position.
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.get(self.pos + offset).copied()
    }

    /// Consume and return the current byte.
    pub fn advance(&mut self) -> Option<u8> {
        let b = self.input.get(self.pos).copied();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    /// Move forward by `n` bytes, stopping at the end of input.
    pub fn skip(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// The `len` bytes starting at the current position, if that many remain.
    pub fn slice(&self, len: usize) -> Option<&'a [u8]> {
        self.input.get(self.pos..self.pos + len)
    }

    /// Check whether `b` is whitespace for this cursor.
    pub fn is_whitespace(&self, b: u8) -> bool {
        self.whitespace.contains(b)
    }

    /// Skip whitespace characters.
    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if !self.is_whitespace(b) {
                break;
            }
            self.pos += 1;
        }
    }
}
