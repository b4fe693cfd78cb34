use shlexer::lexer::{ByteOffset, LexStep, Token, TokenKind, Tokenizer};

// one two "three four" "five \"six\"" seven#eight # nine # ten
// eleven 'twelve\'
const MIXED_INPUT: &str = "\\one two \"three four\" \"five \\\"six\\\"\" seven#eight # nine # ten\n eleven 'twelve\\' thirteen=13 fourteen/14";

fn collect_tokens(input: &str) -> Vec<Token> {
    Tokenizer::new(input.as_bytes())
        .collect::<Result<Vec<_>, _>>()
        .expect("scan should succeed")
}

#[test]
fn mixed_input_yields_words_and_comments_in_order() {
    assert_eq!(
        collect_tokens(MIXED_INPUT),
        vec![
            Token::word("one"),
            Token::word("two"),
            Token::word("three four"),
            Token::word("five \"six\""),
            Token::word("seven#eight"),
            Token::comment(" nine # ten"),
            Token::word("eleven"),
            Token::word("twelve\\"),
            Token::word("thirteen=13"),
            Token::word("fourteen/14"),
        ]
    );
}

#[test]
fn whitespace_runs_produce_no_tokens() {
    assert!(collect_tokens("").is_empty());
    assert!(collect_tokens(" \t\r\n  ").is_empty());
    assert_eq!(
        collect_tokens("  a \t\n b  "),
        vec![Token::word("a"), Token::word("b")]
    );
}

#[test]
fn escape_outside_quotes_makes_next_rune_literal() {
    assert_eq!(collect_tokens("foo\\ bar"), vec![Token::word("foo bar")]);
    assert_eq!(collect_tokens("\\#x"), vec![Token::word("#x")]);
    assert_eq!(collect_tokens("a\\\nb"), vec![Token::word("a\nb")]);
    assert_eq!(collect_tokens("\\\\"), vec![Token::word("\\")]);
    assert_eq!(collect_tokens("\\'x"), vec![Token::word("'x")]);
}

#[test]
fn adjacent_quoted_runs_join_into_one_word() {
    assert_eq!(
        collect_tokens("foo\"bar baz\"'q x'end"),
        vec![Token::word("foobar bazq xend")]
    );
}

#[test]
fn empty_quotes_yield_empty_words() {
    assert_eq!(
        collect_tokens("a \"\" '' b"),
        vec![
            Token::word("a"),
            Token::word(""),
            Token::word(""),
            Token::word("b"),
        ]
    );
}

#[test]
fn end_of_input_is_sticky() {
    let mut tokenizer = Tokenizer::new("word".as_bytes());
    assert_eq!(
        tokenizer.next_token().expect("scan should succeed"),
        LexStep::Token(Token::word("word"))
    );
    for _ in 0..3 {
        assert_eq!(
            tokenizer.next_token().expect("scan should succeed"),
            LexStep::EndOfInput
        );
    }
}

#[test]
fn offset_tracks_consumed_bytes() {
    let mut tokenizer = Tokenizer::new("ab cd".as_bytes());
    assert_eq!(tokenizer.offset(), ByteOffset::new(0));

    let _ = tokenizer.next_token().expect("scan should succeed");
    assert_eq!(tokenizer.offset(), ByteOffset::new(3));

    let _ = tokenizer.next_token().expect("scan should succeed");
    assert_eq!(tokenizer.offset(), ByteOffset::new(5));
    assert_eq!(tokenizer.offset().value(), 5);
}

#[test]
fn token_equality_is_structural() {
    assert_eq!(Token::word("x"), Token::new(TokenKind::Word, "x"));
    assert_ne!(Token::word("x"), Token::comment("x"));
    assert_eq!(Token::comment(" c").to_string(), "Comment(\" c\")");
}
