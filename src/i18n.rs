//! Translation hooks for user-facing messages.
//!
//! Hooks are passed in as a [`Translator`] value wherever a message is
//! rendered; nothing here is process-wide.

use std::fmt;

/// Message catalog lookup.
pub trait Translator {
    /// Translates `msgid`.
    fn gettext(&self, msgid: &str) -> String;

    /// Translates `msgid`, picking the plural form for `n`.
    fn ngettext(&self, msgid: &str, msgid_plural: &str, n: u64) -> String;
}

/// Identity catalog. Uses the singular form only when `n == 1`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Untranslated;

impl Translator for Untranslated {
    fn gettext(&self, msgid: &str) -> String {
        msgid.to_string()
    }

    fn ngettext(&self, msgid: &str, msgid_plural: &str, n: u64) -> String {
        if n == 1 {
            msgid.to_string()
        } else {
            msgid_plural.to_string()
        }
    }
}

/// Catalog built from two closures.
pub struct FnTranslator<G, N> {
    gettext: G,
    ngettext: N,
}

impl<G, N> FnTranslator<G, N>
where
    G: Fn(&str) -> String,
    N: Fn(&str, &str, u64) -> String,
{
    /// Creates a catalog from the singular and plural lookups.
    pub fn new(gettext: G, ngettext: N) -> Self {
        Self { gettext, ngettext }
    }
}

impl<G, N> Translator for FnTranslator<G, N>
where
    G: Fn(&str) -> String,
    N: Fn(&str, &str, u64) -> String,
{
    fn gettext(&self, msgid: &str) -> String {
        (self.gettext)(msgid)
    }

    fn ngettext(&self, msgid: &str, msgid_plural: &str, n: u64) -> String {
        (self.ngettext)(msgid, msgid_plural, n)
    }
}

impl<G, N> fmt::Debug for FnTranslator<G, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTranslator").finish_non_exhaustive()
    }
}
