//! Rune classification for the tokenizer state machine.

use std::collections::HashMap;

/// Token-class tag assigned to one input rune.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuneTokenClass {
    /// Ordinary word content.
    Word,
    /// Word separator.
    Space,
    /// Opens and closes a quote inside which the escape rune still works (`"`).
    EscapingQuote,
    /// Opens and closes a fully literal quote (`'`).
    NonEscapingQuote,
    /// Makes the next rune literal (`\`).
    Escape,
    /// Starts a comment when seen between words (`#`).
    Comment,
    /// End of input. Never produced for a real rune.
    Eof,
}

impl RuneTokenClass {
    /// Returns the class a rune carries once it has been escaped.
    ///
    /// Every class collapses to [`RuneTokenClass::Word`] except
    /// [`RuneTokenClass::Eof`], which has no rune to make literal.
    pub fn escaped(self) -> Self {
        match self {
            Self::Eof => Self::Eof,
            _ => Self::Word,
        }
    }
}

/// Maps runes to token classes.
pub trait RuneClassifier {
    /// Classifies one rune. Must be total.
    fn classify(&self, rune: char) -> RuneTokenClass;
}

impl<C: RuneClassifier + ?Sized> RuneClassifier for &C {
    fn classify(&self, rune: char) -> RuneTokenClass {
        (**self).classify(rune)
    }
}

/// Classifier with the POSIX-like default table.
///
/// | class | runes |
/// |-------|-------|
/// | space | `' '`, `'\t'`, `'\n'`, `'\r'` |
/// | escaping quote | `"` |
/// | non-escaping quote | `'` |
/// | escape | `\` |
/// | comment | `#` |
///
/// Everything else is word content.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefaultClassifier;

impl RuneClassifier for DefaultClassifier {
    fn classify(&self, rune: char) -> RuneTokenClass {
        match rune {
            ' ' | '\t' | '\n' | '\r' => RuneTokenClass::Space,
            '"' => RuneTokenClass::EscapingQuote,
            '\'' => RuneTokenClass::NonEscapingQuote,
            '\\' => RuneTokenClass::Escape,
            '#' => RuneTokenClass::Comment,
            _ => RuneTokenClass::Word,
        }
    }
}

/// Table-driven classifier for custom quoting and comment syntaxes.
///
/// Starts from the default table; [`ClassTable::with_class`] reassigns runes.
/// Runes missing from the table are word content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassTable {
    classes: HashMap<char, RuneTokenClass>,
}

impl ClassTable {
    /// Creates a table where every rune is word content.
    pub fn empty() -> Self {
        Self {
            classes: HashMap::new(),
        }
    }

    /// Assigns `class` to each rune in `runes`, replacing earlier entries.
    ///
    /// Assigning [`RuneTokenClass::Word`] removes the entry. Real runes never
    /// classify as [`RuneTokenClass::Eof`], so that class removes it too.
    pub fn with_class(
        mut self,
        runes: impl IntoIterator<Item = char>,
        class: RuneTokenClass,
    ) -> Self {
        for rune in runes {
            if matches!(class, RuneTokenClass::Word | RuneTokenClass::Eof) {
                self.classes.remove(&rune);
            } else {
                self.classes.insert(rune, class);
            }
        }
        self
    }
}

impl Default for ClassTable {
    fn default() -> Self {
        Self::empty()
            .with_class([' ', '\t', '\n', '\r'], RuneTokenClass::Space)
            .with_class(['"'], RuneTokenClass::EscapingQuote)
            .with_class(['\''], RuneTokenClass::NonEscapingQuote)
            .with_class(['\\'], RuneTokenClass::Escape)
            .with_class(['#'], RuneTokenClass::Comment)
    }
}

impl RuneClassifier for ClassTable {
    fn classify(&self, rune: char) -> RuneTokenClass {
        self.classes
            .get(&rune)
            .copied()
            .unwrap_or(RuneTokenClass::Word)
    }
}
