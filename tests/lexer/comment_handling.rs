use shlexer::lexer::{ClassTable, RuneTokenClass, Token, Tokenizer};
use shlexer::split;

fn collect_tokens(input: &str) -> Vec<Token> {
    Tokenizer::new(input.as_bytes())
        .collect::<Result<Vec<_>, _>>()
        .expect("scan should succeed")
}

#[test]
fn comment_runs_to_newline_and_drops_it() {
    assert_eq!(
        collect_tokens("# c1\nword # c2"),
        vec![
            Token::comment(" c1"),
            Token::word("word"),
            Token::comment(" c2"),
        ]
    );
}

#[test]
fn hash_inside_word_is_literal() {
    assert_eq!(
        split("seven#eight # nine").expect("split should succeed"),
        vec!["seven#eight"]
    );
}

#[test]
fn quoted_hash_does_not_start_comment() {
    assert_eq!(
        split("'#x' \"#y\"").expect("split should succeed"),
        vec!["#x", "#y"]
    );
}

#[test]
fn comment_text_is_not_processed() {
    assert_eq!(
        collect_tokens("#  'open \"quote \\"),
        vec![Token::comment("  'open \"quote \\")]
    );
}

#[test]
fn lone_hash_is_an_empty_comment() {
    assert_eq!(collect_tokens("#"), vec![Token::comment("")]);
    assert!(split("#").expect("split should succeed").is_empty());
}

#[test]
fn carriage_return_stays_in_comment_text() {
    assert_eq!(
        collect_tokens("#a\r\nb"),
        vec![Token::comment("a\r"), Token::word("b")]
    );
}

#[test]
fn newline_only_ends_comment_when_classified_as_space() {
    let table = ClassTable::default().with_class(['\n'], RuneTokenClass::Word);
    let tokens = Tokenizer::with_classifier("#a\nb".as_bytes(), &table)
        .collect::<Result<Vec<_>, _>>()
        .expect("scan should succeed");
    assert_eq!(tokens, vec![Token::comment("a\nb")]);
}
