//! Lexer for the Brace language.
//!
//! Converts source text into an ordered stream of [`Token`]s for the parser.
//! The tokenizer is pull-based: call [`Tokenizer::next_token`] (or iterate)
//! until it returns `None`. Lexical errors arrive in-band as
//! [`Token::Error`] and never stop the stream.
//!
//! ```
//! use brace_lexer::{tokenize, Literal, Token};
//!
//! let tokens = tokenize("x >= -7");
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::Name("x".into()),
//!         Token::Gte,
//!         Token::Literal(Literal::Int(-7)),
//!     ]
//! );
//! ```

pub mod config;
pub mod cursor;
pub mod keywords;
pub mod lex_error;
pub mod token;
pub mod tokenizer;

pub use config::{CompoundOperators, TokenizerConfig};
pub use cursor::{Cursor, Position};
pub use lex_error::{LexError, LexErrorKind};
pub use token::{Literal, Token, TokenKind};
pub use tokenizer::Tokenizer;

use tracing::debug;

/// Tokenize an entire source string with the default configuration.
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with(source, TokenizerConfig::default())
}

/// Tokenize an entire source string.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize_with(source: &str, config: TokenizerConfig) -> Vec<Token> {
    let tokens: Vec<Token> = Tokenizer::with_config(source, config).collect();
    debug!(
        count = tokens.len(),
        errors = tokens.iter().filter(|t| t.is_error()).count(),
        "tokenized"
    );
    tokens
}
