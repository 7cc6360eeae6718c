//! Hand-written tokenizer producing one [`Token`] per call.
//!
//! # Design
//!
//! `next_token` skips whitespace, consumes one driving character and
//! dispatches on it: identifier/keyword, number, string, or a symbol. Every
//! scan is built from the cursor's `peek`/`advance` pair, so lookahead never
//! exceeds one character.
//!
//! Errors are encoded as [`Token::Error`], not as `Result::Err`. The cursor
//! is left wherever the failing scan stopped and the next call resumes from
//! there.

use std::iter::FusedIterator;

use tracing::trace;

use crate::config::TokenizerConfig;
use crate::cursor::{Cursor, Position};
use crate::keywords;
use crate::lex_error::{LexError, LexErrorKind};
use crate::token::{Literal, Token};

/// Stateful tokenizer over a borrowed source string.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    config: TokenizerConfig,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, TokenizerConfig::default())
    }

    pub fn with_config(source: &'a str, config: TokenizerConfig) -> Self {
        Tokenizer {
            cursor: Cursor::new(source),
            config,
        }
    }

    /// Produce the next token.
    ///
    /// Returns `None` once the source is exhausted. Subsequent calls keep
    /// returning `None`.
    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();

        let start = self.cursor.position();
        let c = self.cursor.advance()?;
        let token = match c {
            c if c.is_alphabetic() => self.name_or_keyword(c),
            '0'..='9' => self.number(c, start, false),
            '"' => self.string(),
            ',' => Token::Comma,
            ':' => Token::Colon,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '{' => Token::LBrace,
            '}' => Token::RBrace,
            '+' => Token::Plus,
            '/' => Token::Slash,
            '-' => self.minus_arrow_or_negative(start),
            '*' => self.compound('*', Token::DoubleStar, Token::Star),
            '=' => self.compound('=', Token::Equal, Token::Assign),
            '>' => self.compound('=', Token::Gte, Token::Gt),
            '<' => self.compound('=', Token::Lte, Token::Lt),
            found => error(LexErrorKind::InvalidChar { found }, start),
        };
        Some(token)
    }

    /// Line/column of the next unconsumed character.
    #[inline]
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    #[inline]
    pub fn config(&self) -> TokenizerConfig {
        self.config
    }

    // ─── Whitespace ───────────────────────────────────────────────────

    fn skip_whitespace(&mut self) {
        while self.cursor.peek().is_some_and(char::is_whitespace) {
            self.cursor.advance();
        }
    }

    // ─── Identifiers ──────────────────────────────────────────────────

    fn name_or_keyword(&mut self, first: char) -> Token {
        let mut text = String::from(first);
        while let Some(c) = self.cursor.peek() {
            if !is_ident_continue(c) {
                break;
            }
            text.push(c);
            self.cursor.advance();
        }

        keywords::lookup(&text).unwrap_or(Token::Name(text))
    }

    // ─── Operators ────────────────────────────────────────────────────

    fn minus_arrow_or_negative(&mut self, start: Position) -> Token {
        match self.cursor.peek() {
            Some('>') => {
                self.cursor.advance();
                Token::RArrow
            }
            Some(digit @ '0'..='9') => {
                self.cursor.advance();
                self.number(digit, start, true)
            }
            _ => Token::Minus,
        }
    }

    /// Two-character operator whose first character was already consumed.
    ///
    /// Emits `paired` when the lookahead is `second`, otherwise `single`.
    /// Whether `second` is consumed depends on the configured
    /// [`CompoundOperators`](crate::CompoundOperators) mode.
    fn compound(&mut self, second: char, paired: Token, single: Token) -> Token {
        if self.cursor.peek() != Some(second) {
            return single;
        }
        if self.config.consumes_compound_operators() {
            self.cursor.advance();
        }
        paired
    }

    // ─── Numbers ──────────────────────────────────────────────────────

    /// Scan the rest of a numeric literal after its first digit.
    ///
    /// `start` is where the literal began (the `-` for negative literals).
    /// A second `.` aborts the scan with the cursor parked on that `.`.
    fn number(&mut self, first: char, start: Position, negative: bool) -> Token {
        let mut text = String::with_capacity(8);
        if negative {
            text.push('-');
        }
        text.push(first);

        let mut seen_dot = false;
        while let Some(c) = self.cursor.peek() {
            match c {
                '0'..='9' => {}
                '.' if seen_dot => {
                    return error(LexErrorKind::ExtraDecimalPoint, self.cursor.position());
                }
                '.' => seen_dot = true,
                _ => break,
            }
            text.push(c);
            self.cursor.advance();
        }

        let literal = if seen_dot {
            text.parse().map(Literal::Float).ok()
        } else {
            text.parse().map(Literal::Int).ok()
        };
        match literal {
            Some(lit) => Token::Literal(lit),
            None => error(LexErrorKind::NumberOutOfRange, start),
        }
    }

    // ─── Strings ──────────────────────────────────────────────────────

    /// Scan a string body after the opening `"`. Content is taken verbatim.
    fn string(&mut self) -> Token {
        let mut text = String::new();
        while let Some(c) = self.cursor.advance() {
            if c == '"' {
                return Token::Literal(Literal::Str(text));
            }
            text.push(c);
        }
        error(LexErrorKind::UnterminatedString, self.cursor.position())
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    #[inline]
    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

impl FusedIterator for Tokenizer<'_> {}

fn error(kind: LexErrorKind, position: Position) -> Token {
    trace!(?kind, %position, "lex error");
    Token::Error(LexError::new(kind, position))
}

#[inline]
fn is_ident_continue(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}
