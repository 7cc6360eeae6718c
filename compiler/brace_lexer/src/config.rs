//! Tokenizer configuration.

/// How the second character of `**`, `==`, `>=` and `<=` is handled.
///
/// `->` always consumes its `>` and is not affected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CompoundOperators {
    /// Consume both characters: `a == b` lexes as `NAME EQUAL NAME`.
    #[default]
    Consume,
    /// Only peek at the second character and leave it in the stream, so it
    /// is scanned again as the start of the next token: `==` lexes as
    /// `EQUAL ASSIGN`. Kept for consumers built against that token stream.
    PeekOnly,
}

/// Options for a [`Tokenizer`](crate::Tokenizer).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TokenizerConfig {
    pub compound_operators: CompoundOperators,
}

impl TokenizerConfig {
    #[must_use]
    pub fn with_compound_operators(mut self, mode: CompoundOperators) -> Self {
        self.compound_operators = mode;
        self
    }

    /// Configuration reproducing the peek-only compound operator stream.
    pub fn legacy() -> Self {
        Self::default().with_compound_operators(CompoundOperators::PeekOnly)
    }

    #[inline]
    pub(crate) fn consumes_compound_operators(self) -> bool {
        self.compound_operators == CompoundOperators::Consume
    }
}
