//! Keyword table.
//!
//! Every reserved spelling maps to a dedicated payload-free [`Token`].
//! Lookup buckets by length first (keywords are 2-8 chars), then matches
//! the exact text. Anything that misses becomes [`Token::Name`] in the
//! tokenizer.

use crate::token::Token;

/// All reserved spellings, in table order.
pub const KEYWORDS: [&str; 20] = [
    "const", "and", "or", "in", "not", "if", "elif", "else", "break", "continue", "while", "for",
    "return", "fn", "int", "float", "str", "bool", "true", "false",
];

/// Look up a reserved keyword by text.
///
/// Returns `None` for ordinary identifiers.
#[inline]
pub fn lookup(text: &str) -> Option<Token> {
    if !(2..=8).contains(&text.len()) {
        return None;
    }

    match text.len() {
        2 => match text {
            "or" => Some(Token::Or),
            "in" => Some(Token::In),
            "if" => Some(Token::If),
            "fn" => Some(Token::Fn),
            _ => None,
        },
        3 => match text {
            "and" => Some(Token::And),
            "not" => Some(Token::Not),
            "for" => Some(Token::For),
            "int" => Some(Token::Int),
            "str" => Some(Token::Str),
            _ => None,
        },
        4 => match text {
            "elif" => Some(Token::Elif),
            "else" => Some(Token::Else),
            "bool" => Some(Token::Bool),
            "true" => Some(Token::True),
            _ => None,
        },
        5 => match text {
            "const" => Some(Token::Const),
            "break" => Some(Token::Break),
            "while" => Some(Token::While),
            "float" => Some(Token::Float),
            "false" => Some(Token::False),
            _ => None,
        },
        6 => match text {
            "return" => Some(Token::Return),
            _ => None,
        },
        8 => match text {
            "continue" => Some(Token::Continue),
            _ => None,
        },
        _ => None,
    }
}
