//! Token types produced by the tokenizer.
//!
//! [`Token`] is a sum type: payload-free variants for punctuation, operators
//! and keywords, and payload-carrying variants for names, literals and
//! errors. [`TokenKind`] is the matching fieldless discriminant, useful when
//! a caller only needs to compare kinds.

use std::fmt;

use crate::lex_error::LexError;

/// Literal payload: integer, float or string.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    /// String contents without the surrounding quotes. No escape processing.
    Str(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(v) => write!(f, "{v}"),
            // Debug keeps the trailing `.0` on whole floats.
            Literal::Float(v) => write!(f, "{v:?}"),
            Literal::Str(s) => f.write_str(s),
        }
    }
}

/// A lexical token.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    // === Payload-carrying ===
    /// Identifier that is not a keyword.
    Name(String),
    Literal(Literal),

    // === Punctuation ===
    Comma,
    Colon,
    /// `->`
    RArrow,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // === Operators ===
    /// `=`
    Assign,
    /// `==`
    Equal,
    Plus,
    Minus,
    Star,
    /// `**`
    DoubleStar,
    Slash,
    Gt,
    Gte,
    Lt,
    Lte,

    // === Keywords ===
    Const,
    And,
    Or,
    In,
    Not,
    If,
    Elif,
    Else,
    Break,
    Continue,
    While,
    For,
    Return,
    Fn,

    // === Type keywords ===
    Int,
    Float,
    Str,
    Bool,

    // === Boolean keywords ===
    True,
    False,

    /// Lexical error. The stream continues after it.
    Error(LexError),
}

impl Token {
    /// The fieldless discriminant for this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Name(_) => TokenKind::Name,
            Token::Literal(_) => TokenKind::Literal,
            Token::Comma => TokenKind::Comma,
            Token::Colon => TokenKind::Colon,
            Token::RArrow => TokenKind::RArrow,
            Token::Assign => TokenKind::Assign,
            Token::Equal => TokenKind::Equal,
            Token::Plus => TokenKind::Plus,
            Token::Minus => TokenKind::Minus,
            Token::Star => TokenKind::Star,
            Token::DoubleStar => TokenKind::DoubleStar,
            Token::Slash => TokenKind::Slash,
            Token::Gt => TokenKind::Gt,
            Token::Gte => TokenKind::Gte,
            Token::Lt => TokenKind::Lt,
            Token::Lte => TokenKind::Lte,
            Token::LParen => TokenKind::LParen,
            Token::RParen => TokenKind::RParen,
            Token::LBrace => TokenKind::LBrace,
            Token::RBrace => TokenKind::RBrace,
            Token::Const => TokenKind::Const,
            Token::And => TokenKind::And,
            Token::Or => TokenKind::Or,
            Token::In => TokenKind::In,
            Token::Not => TokenKind::Not,
            Token::If => TokenKind::If,
            Token::Elif => TokenKind::Elif,
            Token::Else => TokenKind::Else,
            Token::Break => TokenKind::Break,
            Token::Continue => TokenKind::Continue,
            Token::While => TokenKind::While,
            Token::For => TokenKind::For,
            Token::Return => TokenKind::Return,
            Token::Fn => TokenKind::Fn,
            Token::Int => TokenKind::Int,
            Token::Float => TokenKind::Float,
            Token::Str => TokenKind::Str,
            Token::Bool => TokenKind::Bool,
            Token::True => TokenKind::True,
            Token::False => TokenKind::False,
            Token::Error(_) => TokenKind::Error,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Token::Error(_))
    }

    #[inline]
    pub fn is_keyword(&self) -> bool {
        self.kind().is_keyword()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.kind().name();
        match self {
            Token::Name(text) => write!(f, "{name}:{text}"),
            Token::Literal(lit) => write!(f, "{name}:{lit}"),
            Token::Error(err) => write!(f, "{name}:{err}"),
            _ => f.write_str(name),
        }
    }
}

/// Fieldless token discriminant.
///
/// Discriminant values are stable and grouped by category:
///
/// | Range | Category      |
/// |-------|---------------|
/// | 1-2   | Names, literals |
/// | 3-5   | Punctuation   |
/// | 6-16  | Operators     |
/// | 17-20 | Brackets      |
/// | 21-34 | Keywords      |
/// | 35-38 | Type keywords |
/// | 39-40 | Booleans      |
/// | 41    | Error         |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    Name = 1,
    Literal = 2,

    Comma = 3,
    Colon = 4,
    RArrow = 5,

    Assign = 6,
    Equal = 7,
    Plus = 8,
    Minus = 9,
    Star = 10,
    DoubleStar = 11,
    Slash = 12,
    Gt = 13,
    Gte = 14,
    Lt = 15,
    Lte = 16,

    LParen = 17,
    RParen = 18,
    LBrace = 19,
    RBrace = 20,

    Const = 21,
    And = 22,
    Or = 23,
    In = 24,
    Not = 25,
    If = 26,
    Elif = 27,
    Else = 28,
    Break = 29,
    Continue = 30,
    While = 31,
    For = 32,
    Return = 33,
    Fn = 34,

    Int = 35,
    Float = 36,
    Str = 37,
    Bool = 38,

    True = 39,
    False = 40,

    Error = 41,
}

impl TokenKind {
    /// Upper-case kind name as shown in token dumps (`DOUBLE_STAR`, `NAME`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "NAME",
            Self::Literal => "LITERAL",
            Self::Comma => "COMMA",
            Self::Colon => "COLON",
            Self::RArrow => "RARROW",
            Self::Assign => "ASSIGN",
            Self::Equal => "EQUAL",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Star => "STAR",
            Self::DoubleStar => "DOUBLE_STAR",
            Self::Slash => "SLASH",
            Self::Gt => "GT",
            Self::Gte => "GTE",
            Self::Lt => "LT",
            Self::Lte => "LTE",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::Const => "CONST",
            Self::And => "AND",
            Self::Or => "OR",
            Self::In => "IN",
            Self::Not => "NOT",
            Self::If => "IF",
            Self::Elif => "ELIF",
            Self::Else => "ELSE",
            Self::Break => "BREAK",
            Self::Continue => "CONTINUE",
            Self::While => "WHILE",
            Self::For => "FOR",
            Self::Return => "RETURN",
            Self::Fn => "FN",
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::Str => "STR",
            Self::Bool => "BOOL",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Error => "ERROR",
        }
    }

    /// Returns `true` for kinds produced from the keyword table.
    pub const fn is_keyword(self) -> bool {
        let tag = self as u8;
        tag >= Self::Const as u8 && tag <= Self::False as u8
    }

    /// Returns `true` for kinds that carry a payload.
    pub const fn has_payload(self) -> bool {
        matches!(self, Self::Name | Self::Literal | Self::Error)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
