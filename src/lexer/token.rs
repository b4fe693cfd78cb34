//! Token contracts produced by the tokenizer.

use std::fmt;

/// Token categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A word with quoting and escaping syntax removed.
    Word,
    /// Raw text after a comment marker, up to end of line.
    Comment,
}

/// A lexical token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Token category.
    pub kind: TokenKind,
    /// Token text.
    pub value: String,
}

impl Token {
    /// Creates a token value.
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Creates a word token.
    pub fn word(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Word, value)
    }

    /// Creates a comment token.
    pub fn comment(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Comment, value)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Word => write!(f, "Word({:?})", self.value),
            TokenKind::Comment => write!(f, "Comment({:?})", self.value),
        }
    }
}

/// One step produced by [`crate::lexer::Tokenizer::next_token`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexStep {
    /// A concrete token was produced.
    Token(Token),
    /// End of input was reached.
    EndOfInput,
}
