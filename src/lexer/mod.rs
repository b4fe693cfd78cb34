//! Shell-style lexer.
//!
//! Input flows through three layers:
//! - [`RuneClassifier`] tags each rune with a [`RuneTokenClass`]
//! - [`Tokenizer`] runs the quoting state machine and yields [`Token`] values
//! - [`Lexer`] drops comments and yields word strings
//!
//! [`split`] drains a [`Lexer`] over a string.

pub mod classifier;
pub mod diagnostics;
pub mod span;
pub mod token;

mod cursor;
mod tokenizer;

use std::io::Read;
use std::iter::FusedIterator;

use tracing::debug;

pub use classifier::{ClassTable, DefaultClassifier, RuneClassifier, RuneTokenClass};
pub use diagnostics::{LexError, QuoteStyle};
pub use span::ByteOffset;
pub use token::{LexStep, Token, TokenKind};
pub use tokenizer::Tokenizer;

/// Word-only view over a [`Tokenizer`].
#[derive(Debug)]
pub struct Lexer<R, C = DefaultClassifier> {
    tokenizer: Tokenizer<R, C>,
}

impl<R: Read> Lexer<R> {
    /// Creates a lexer using [`DefaultClassifier`].
    pub fn new(reader: R) -> Self {
        Self {
            tokenizer: Tokenizer::new(reader),
        }
    }
}

impl<R: Read, C: RuneClassifier> Lexer<R, C> {
    /// Creates a lexer using a custom classifier.
    pub fn with_classifier(reader: R, classifier: C) -> Self {
        Self {
            tokenizer: Tokenizer::with_classifier(reader, classifier),
        }
    }

    /// Returns the next word, skipping comments. `None` marks end of input.
    pub fn next_word(&mut self) -> Result<Option<String>, LexError> {
        loop {
            match self.tokenizer.next_token()? {
                LexStep::Token(Token {
                    kind: TokenKind::Word,
                    value,
                }) => return Ok(Some(value)),
                LexStep::Token(_) => continue,
                LexStep::EndOfInput => return Ok(None),
            }
        }
    }
}

impl<R: Read, C: RuneClassifier> Iterator for Lexer<R, C> {
    type Item = Result<String, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_word().transpose()
    }
}

impl<R: Read, C: RuneClassifier> FusedIterator for Lexer<R, C> {}

/// Splits `input` into words using shell-like quoting, escaping, and comments.
///
/// Fails without partial output on the first error.
pub fn split(input: &str) -> Result<Vec<String>, LexError> {
    split_reader(input.as_bytes())
}

/// Same as [`split`], reading from any byte source.
pub fn split_reader<R: Read>(reader: R) -> Result<Vec<String>, LexError> {
    Lexer::new(reader)
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|error| debug!(%error, "split failed"))
}
