//! Character cursor over a borrowed source string.
//!
//! The cursor walks the source one `char` at a time and keeps a 1-based
//! line/column pair alongside the byte offset. Scanning code only ever
//! touches two primitives: [`Cursor::peek`] (non-consuming) and
//! [`Cursor::advance`] (consuming). Everything else in the tokenizer is
//! built from those two.
//!
//! # Invariants
//!
//! - `pos` never decreases and always sits on a `char` boundary.
//! - `pos <= source.len()`; at `pos == source.len()` both primitives
//!   return `None`.
//! - Consuming `'\n'` increments `line` and resets `column` to 1. Any other
//!   character increments `column` by one, regardless of its UTF-8 width.

use std::fmt;

/// A 1-based line/column location in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Location of the first character of any source.
    pub const START: Position = Position { line: 1, column: 1 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Scanning cursor: `{source, pos, line, column}`.
///
/// The cursor is [`Copy`], so a caller can snapshot it before a speculative
/// scan. The tokenizer itself never rewinds.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Borrowed source text, never mutated.
    source: &'a str,
    /// Byte offset of the next unconsumed character.
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        Cursor {
            source,
            pos: 0,
            line: Position::START.line,
            column: Position::START.column,
        }
    }

    /// Returns the next character without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.source.get(self.pos..)?.chars().next()
    }

    /// Consumes and returns the next character, updating line and column.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Byte offset of the next unconsumed character.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Line/column of the next unconsumed character.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The full source this cursor walks.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }
}

#[cfg(test)]
mod tests;
