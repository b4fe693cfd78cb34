//! Tokenizer state machine.
//!
//! The machine is flat: quoting does not nest, so one `RunState` and one
//! pending buffer describe the whole scan. Each call to
//! [`Tokenizer::next_token`] starts in `RunState::Start` and runs until a
//! token boundary, end of input, or an error.

use std::io::Read;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::lexer::classifier::{DefaultClassifier, RuneClassifier, RuneTokenClass};
use crate::lexer::cursor::RuneCursor;
use crate::lexer::diagnostics::{LexError, QuoteStyle};
use crate::lexer::span::ByteOffset;
use crate::lexer::token::{LexStep, Token, TokenKind};

/// Mode governing how the next rune is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    /// Between tokens.
    Start,
    /// Inside an unquoted word.
    InWord,
    /// After an unquoted escape rune.
    Escaping,
    /// Inside `"..."`.
    EscapingQuoted,
    /// After an escape rune inside `"..."`.
    QuotedEscape,
    /// Inside `'...'`.
    NonEscapingQuoted,
    /// Inside a comment.
    Comment,
}

/// Outcome of feeding one classified rune to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    /// Move to `next`, appending the rune when `append` is set.
    Goto { next: RunState, append: bool },
    /// The pending token is complete. The boundary rune is dropped.
    Emit,
    /// Input ended between tokens.
    EndOfInput,
    /// Input ended right after an escape rune.
    UnterminatedEscape,
    /// Input ended inside a quote.
    UnterminatedQuote(QuoteStyle),
}

impl Transition {
    const fn goto(next: RunState) -> Self {
        Self::Goto {
            next,
            append: false,
        }
    }

    const fn append(next: RunState) -> Self {
        Self::Goto { next, append: true }
    }
}

/// Transition function keyed on the current state and the rune class.
///
/// `rune` is `None` exactly when `class` is [`RuneTokenClass::Eof`].
fn transition(state: RunState, class: RuneTokenClass, rune: Option<char>) -> Transition {
    use RuneTokenClass as Class;

    match state {
        RunState::Start => match class {
            Class::Eof => Transition::EndOfInput,
            Class::Space => Transition::goto(RunState::Start),
            Class::EscapingQuote => Transition::goto(RunState::EscapingQuoted),
            Class::NonEscapingQuote => Transition::goto(RunState::NonEscapingQuoted),
            Class::Escape => Transition::goto(RunState::Escaping),
            Class::Comment => Transition::goto(RunState::Comment),
            Class::Word => Transition::append(RunState::InWord),
        },
        RunState::InWord => match class {
            Class::Eof | Class::Space => Transition::Emit,
            Class::EscapingQuote => Transition::goto(RunState::EscapingQuoted),
            Class::NonEscapingQuote => Transition::goto(RunState::NonEscapingQuoted),
            Class::Escape => Transition::goto(RunState::Escaping),
            // `#` only opens a comment between words.
            Class::Comment | Class::Word => Transition::append(RunState::InWord),
        },
        RunState::Escaping => match class.escaped() {
            Class::Eof => Transition::UnterminatedEscape,
            _ => Transition::append(RunState::InWord),
        },
        RunState::QuotedEscape => match class.escaped() {
            Class::Eof => Transition::UnterminatedEscape,
            _ => Transition::append(RunState::EscapingQuoted),
        },
        RunState::EscapingQuoted => match class {
            Class::Eof => Transition::UnterminatedQuote(QuoteStyle::Escaping),
            Class::EscapingQuote => Transition::goto(RunState::InWord),
            Class::Escape => Transition::goto(RunState::QuotedEscape),
            _ => Transition::append(RunState::EscapingQuoted),
        },
        RunState::NonEscapingQuoted => match class {
            Class::Eof => Transition::UnterminatedQuote(QuoteStyle::NonEscaping),
            Class::NonEscapingQuote => Transition::goto(RunState::InWord),
            _ => Transition::append(RunState::NonEscapingQuoted),
        },
        RunState::Comment => match (class, rune) {
            (Class::Eof, _) | (Class::Space, Some('\n')) => Transition::Emit,
            _ => Transition::append(RunState::Comment),
        },
    }
}

/// Single-pass producer of [`Token`] values over one input stream.
///
/// A tokenizer cannot be rewound. Once it reports end of input or an error
/// it is exhausted and every later call returns [`LexStep::EndOfInput`].
#[derive(Debug)]
pub struct Tokenizer<R, C = DefaultClassifier> {
    cursor: RuneCursor<R>,
    classifier: C,
    exhausted: bool,
}

impl<R: Read> Tokenizer<R> {
    /// Creates a tokenizer using [`DefaultClassifier`].
    pub fn new(reader: R) -> Self {
        Self::with_classifier(reader, DefaultClassifier)
    }
}

impl<R: Read, C: RuneClassifier> Tokenizer<R, C> {
    /// Creates a tokenizer using a custom classifier.
    pub fn with_classifier(reader: R, classifier: C) -> Self {
        Self {
            cursor: RuneCursor::new(reader),
            classifier,
            exhausted: false,
        }
    }

    /// Returns the offset of the next unread input byte.
    pub fn offset(&self) -> ByteOffset {
        self.cursor.offset()
    }

    /// Scans and returns the next token.
    ///
    /// Read failures are returned as [`LexError::Io`] holding the source's
    /// own error value.
    pub fn next_token(&mut self) -> Result<LexStep, LexError> {
        if self.exhausted {
            return Ok(LexStep::EndOfInput);
        }

        let step = self.scan();
        if !matches!(step, Ok(LexStep::Token(_))) {
            self.exhausted = true;
        }
        step
    }

    fn scan(&mut self) -> Result<LexStep, LexError> {
        let mut state = RunState::Start;
        let mut kind = TokenKind::Word;
        let mut value = String::new();
        let mut quote_at = ByteOffset::default();
        let mut escape_at = ByteOffset::default();

        loop {
            let offset = self.cursor.offset();
            let rune = self.cursor.next_rune()?;
            let class = match rune {
                Some(rune) => self.classifier.classify(rune),
                None => RuneTokenClass::Eof,
            };

            match transition(state, class, rune) {
                Transition::Goto { next, append } => {
                    if state == RunState::Start && next == RunState::Comment {
                        kind = TokenKind::Comment;
                    }
                    match next {
                        RunState::Escaping | RunState::QuotedEscape => escape_at = offset,
                        RunState::EscapingQuoted | RunState::NonEscapingQuoted
                            if matches!(state, RunState::Start | RunState::InWord) =>
                        {
                            quote_at = offset;
                        }
                        _ => {}
                    }
                    if append {
                        value.extend(rune);
                    }
                    state = next;
                }
                Transition::Emit => {
                    let token = Token::new(kind, value);
                    trace!(kind = ?token.kind, value = %token.value, "token emitted");
                    return Ok(LexStep::Token(token));
                }
                Transition::EndOfInput => return Ok(LexStep::EndOfInput),
                Transition::UnterminatedEscape => {
                    debug!(offset = %escape_at, "input ended after escape character");
                    return Err(LexError::UnterminatedEscape { offset: escape_at });
                }
                Transition::UnterminatedQuote(quote) => {
                    debug!(offset = %quote_at, ?quote, "input ended inside quote");
                    return Err(LexError::UnterminatedQuote {
                        offset: quote_at,
                        quote,
                    });
                }
            }
        }
    }
}

impl<R: Read, C: RuneClassifier> Iterator for Tokenizer<R, C> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(LexStep::Token(token)) => Some(Ok(token)),
            Ok(LexStep::EndOfInput) => None,
            Err(error) => Some(Err(error)),
        }
    }
}

impl<R: Read, C: RuneClassifier> FusedIterator for Tokenizer<R, C> {}
