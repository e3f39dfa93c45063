use super::*;

#[test]
fn same_word_across_files_gets_the_same_token() {
    let mut lexer = WhitespaceLexer::new();
    let a = lexer.tokenize("foo bar baz");
    let b = lexer.tokenize("baz bar foo");
    assert_eq!(a[0], b[2]);
    assert_eq!(a[1], b[1]);
    assert_eq!(a[2], b[0]);
}

#[test]
fn distinct_words_get_distinct_tokens() {
    let mut lexer = WhitespaceLexer::new();
    let toks = lexer.tokenize("alpha beta gamma");
    assert_ne!(toks[0], toks[1]);
    assert_ne!(toks[1], toks[2]);
}

#[test]
fn no_token_ever_collides_with_the_sentinel() {
    let mut lexer = WhitespaceLexer::new();
    for t in lexer.tokenize("a b c d e") {
        assert_ne!(t, Token::SENTINEL);
    }
}

#[test]
fn punctuation_only_words_may_not_start_a_run() {
    let mut lexer = WhitespaceLexer::new();
    let toks = lexer.tokenize("foo ; -> bar");
    assert!(lexer.may_be_start_of_run(toks[0])); // foo
    assert!(!lexer.may_be_start_of_run(toks[1])); // ;
    assert!(!lexer.may_be_start_of_run(toks[2])); // ->
    assert!(lexer.may_be_start_of_run(toks[3])); // bar
}

#[test]
fn alphanumeric_identifiers_may_start_a_run() {
    let mut lexer = WhitespaceLexer::new();
    let toks = lexer.tokenize("x1 2y foo123");
    for t in toks {
        assert!(lexer.may_be_start_of_run(t));
    }
}

#[test]
fn empty_source_tokenizes_to_nothing() {
    let mut lexer = WhitespaceLexer::new();
    assert!(lexer.tokenize("   \n\t  ").is_empty());
}
