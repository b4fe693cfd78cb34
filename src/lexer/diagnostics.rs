//! Error contracts for the tokenizer.

use std::io;

use crate::i18n::Translator;
use crate::lexer::span::ByteOffset;

/// Quote style left open at end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteStyle {
    /// `"..."`
    Escaping,
    /// `'...'`
    NonEscaping,
}

/// Tokenizer failure.
///
/// Syntax failures carry the offset of the construct left open. Read
/// failures from the input source are passed through untouched in
/// [`LexError::Io`].
#[derive(Debug, thiserror::Error)]
pub enum LexError {
    /// Input ended right after an escape rune.
    #[error("EOF found after escape character")]
    UnterminatedEscape {
        /// Offset of the escape rune.
        offset: ByteOffset,
    },
    /// Input ended inside a quoted run.
    #[error("EOF found when expecting closing quote")]
    UnterminatedQuote {
        /// Offset of the opening quote.
        offset: ByteOffset,
        /// Which quote was left open.
        quote: QuoteStyle,
    },
    /// The input source failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl LexError {
    /// Returns `true` for syntax failures, `false` for read failures.
    pub fn is_syntax(&self) -> bool {
        !matches!(self, Self::Io(_))
    }

    /// Renders the message through `translator`.
    pub fn localized(&self, translator: &dyn Translator) -> String {
        match self {
            Self::Io(error) => error.to_string(),
            _ => translator.gettext(&self.to_string()),
        }
    }
}
