use shlexer::lexer::split_reader;
use shlexer::split;

#[test]
fn multibyte_runes_are_word_content() {
    assert_eq!(
        split("héllo 'wörld ✓' 🦀").expect("split should succeed"),
        vec!["héllo", "wörld ✓", "🦀"]
    );
}

#[test]
fn invalid_bytes_decode_to_replacement() {
    let words = split_reader(&[b'a', 0xFF, b'b'][..]).expect("split should succeed");
    assert_eq!(words, vec!["a\u{FFFD}b"]);
}

#[test]
fn truncated_sequence_keeps_following_rune() {
    let words = split_reader(&[0xE2, 0x82, b' ', b'x'][..]).expect("split should succeed");
    assert_eq!(words, vec!["\u{FFFD}", "x"]);
}

#[test]
fn truncated_sequence_before_quote_still_opens_quote() {
    let words = split_reader(&[0xF0, 0x9F, b'\'', b' ', b'\''][..]).expect("split should succeed");
    assert_eq!(words, vec!["\u{FFFD} "]);
}

#[test]
fn surrogate_encoding_replaces_each_byte() {
    let bytes = [0xED, 0xA0, 0x80];
    let words = split_reader(&bytes[..]).expect("split should succeed");
    assert_eq!(words, vec!["\u{FFFD}\u{FFFD}\u{FFFD}"]);
    assert_eq!(words[0], String::from_utf8_lossy(&bytes));
}

#[test]
fn overlong_encoding_replaces_each_byte() {
    let bytes = b"a\xE0\x80\xAFb";
    let words = split_reader(&bytes[..]).expect("split should succeed");
    assert_eq!(words, vec!["a\u{FFFD}\u{FFFD}\u{FFFD}b"]);
}

#[test]
fn scalar_above_unicode_range_replaces_each_byte() {
    let bytes = [0xF4, 0x90, 0x80, 0x80, b' ', b'z'];
    let words = split_reader(&bytes[..]).expect("split should succeed");
    assert_eq!(words, vec!["\u{FFFD}\u{FFFD}\u{FFFD}\u{FFFD}", "z"]);
}

#[test]
fn valid_boundary_scalars_decode() {
    let input = "\u{800} \u{D7FF} \u{E000} \u{10000} \u{10FFFF}";
    let words = split_reader(input.as_bytes()).expect("split should succeed");
    assert_eq!(
        words,
        vec!["\u{800}", "\u{D7FF}", "\u{E000}", "\u{10000}", "\u{10FFFF}"]
    );
}
