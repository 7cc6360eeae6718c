use super::*;
use crate::cursor::Position;
use crate::lex_error::LexErrorKind;
use pretty_assertions::assert_eq;

// === Discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    assert_eq!(TokenKind::Name as u8, 1);
    assert_eq!(TokenKind::Literal as u8, 2);
    assert_eq!(TokenKind::Comma as u8, 3);
    assert_eq!(TokenKind::RArrow as u8, 5);
    assert_eq!(TokenKind::Assign as u8, 6);
    assert_eq!(TokenKind::Lte as u8, 16);
    assert_eq!(TokenKind::LParen as u8, 17);
    assert_eq!(TokenKind::RBrace as u8, 20);
    assert_eq!(TokenKind::Const as u8, 21);
    assert_eq!(TokenKind::Fn as u8, 34);
    assert_eq!(TokenKind::Int as u8, 35);
    assert_eq!(TokenKind::False as u8, 40);
    assert_eq!(TokenKind::Error as u8, 41);
}

#[test]
fn kind_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 1);
}

// === Kind mapping ===

#[test]
fn payload_tokens_map_to_their_kind() {
    assert_eq!(Token::Name("x".into()).kind(), TokenKind::Name);
    assert_eq!(Token::Literal(Literal::Int(1)).kind(), TokenKind::Literal);
    let err = LexError::new(LexErrorKind::UnterminatedString, Position::START);
    assert_eq!(Token::Error(err).kind(), TokenKind::Error);
}

#[test]
fn keyword_classification() {
    assert!(Token::Const.is_keyword());
    assert!(Token::Fn.is_keyword());
    assert!(Token::Bool.is_keyword());
    assert!(Token::False.is_keyword());
    assert!(!Token::RBrace.is_keyword());
    assert!(!Token::Name("if".into()).is_keyword());
    assert!(!TokenKind::Error.is_keyword());
}

#[test]
fn payload_classification() {
    assert!(TokenKind::Name.has_payload());
    assert!(TokenKind::Literal.has_payload());
    assert!(TokenKind::Error.has_payload());
    assert!(!TokenKind::DoubleStar.has_payload());
    assert!(!TokenKind::True.has_payload());
}

#[test]
fn is_error_only_for_error_tokens() {
    let err = LexError::new(LexErrorKind::ExtraDecimalPoint, Position::new(1, 4));
    assert!(Token::Error(err).is_error());
    assert!(!Token::Minus.is_error());
}

// === Display ===

#[test]
fn display_bare_tokens_use_kind_name() {
    assert_eq!(Token::DoubleStar.to_string(), "DOUBLE_STAR");
    assert_eq!(Token::RArrow.to_string(), "RARROW");
    assert_eq!(Token::Elif.to_string(), "ELIF");
    assert_eq!(TokenKind::LBrace.to_string(), "LBRACE");
}

#[test]
fn display_payload_tokens() {
    assert_eq!(Token::Name("foo_bar".into()).to_string(), "NAME:foo_bar");
    assert_eq!(Token::Literal(Literal::Int(-7)).to_string(), "LITERAL:-7");
    assert_eq!(Token::Literal(Literal::Float(12.5)).to_string(), "LITERAL:12.5");
    assert_eq!(
        Token::Literal(Literal::Str("hello".into())).to_string(),
        "LITERAL:hello"
    );
    let err = LexError::new(LexErrorKind::InvalidChar { found: '@' }, Position::new(2, 3));
    assert_eq!(Token::Error(err).to_string(), "ERROR:invalid char at::2:3");
}

#[test]
fn display_whole_float_keeps_fraction() {
    assert_eq!(Literal::Float(3.0).to_string(), "3.0");
}
