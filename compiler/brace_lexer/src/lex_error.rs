//! Lexical error payload carried by [`Token::Error`](crate::Token::Error).
//!
//! Errors are values in the token stream, not `Result::Err`. The tokenizer
//! stays resumable after producing one; whether to stop is the caller's call.
//!
//! Every error renders the same message shape, `invalid char at::<line>:<col>`,
//! so downstream tools can surface it without matching on the kind. The kind
//! is kept for callers that want to say more.

use crate::cursor::Position;

/// A lexer error: WHAT went wrong and WHERE.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("invalid char at::{position}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: Position,
}

/// What kind of lexer error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// A character that does not start any token.
    InvalidChar { found: char },
    /// A second `.` inside a numeric literal (e.g. `1.2.3`).
    ///
    /// Reported at the offending `.`, which is left unconsumed.
    ExtraDecimalPoint,
    /// End of input reached before the closing `"`.
    UnterminatedString,
    /// Numeric literal that does not fit the literal's value type.
    NumberOutOfRange,
}

impl LexError {
    #[inline]
    pub const fn new(kind: LexErrorKind, position: Position) -> Self {
        LexError { kind, position }
    }

    /// The human-readable diagnostic, `invalid char at::<line>:<col>`.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl LexErrorKind {
    /// Short description of the failure, for tools that want more than the
    /// positional message.
    pub fn describe(self) -> &'static str {
        match self {
            LexErrorKind::InvalidChar { .. } => "unexpected character",
            LexErrorKind::ExtraDecimalPoint => "second decimal point in number",
            LexErrorKind::UnterminatedString => "unterminated string literal",
            LexErrorKind::NumberOutOfRange => "number literal out of range",
        }
    }
}
