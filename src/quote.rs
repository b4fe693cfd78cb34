//! Inverse of [`crate::lexer::split`]: quoting strings for shell reinsertion.
//!
//! Output is POSIX-shell safe. Words made only of safe characters pass
//! through unchanged; everything else is single-quoted, with embedded `'`
//! written as `'"'"'`.

/// Returns `true` for characters that never need quoting.
fn is_safe(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || matches!(ch, '@' | '%' | '_' | '+' | '=' | ':' | ',' | '.' | '/' | '-')
}

/// Quotes `word` so a shell reads it back as one word.
pub fn quote(word: &str) -> String {
    if word.is_empty() {
        return "''".to_string();
    }
    if word.chars().all(is_safe) {
        return word.to_string();
    }

    let mut quoted = String::with_capacity(word.len() + 2);
    quoted.push('\'');
    for ch in word.chars() {
        if ch == '\'' {
            quoted.push_str("'\"'\"'");
        } else {
            quoted.push(ch);
        }
    }
    quoted.push('\'');
    quoted
}

/// Quotes each word and joins them with single spaces.
pub fn join<I, S>(words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| quote(word.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}
