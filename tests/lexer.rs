use robodsl::interpreter::lexer::{Token, Tokenizer};

fn lex(src: &str) -> Vec<Token> {
    Tokenizer::new(src).map(|(token, _)| token).collect()
}

fn word(text: &str) -> Token {
    Token::Word(text.to_string())
}

#[test]
fn punctuation_splits_without_whitespace() {
    assert_eq!(lex("move;"), vec![Token::Move, Token::Semicolon]);
    assert_eq!(lex("loop{turnL;}"),
               vec![Token::Loop, Token::LBrace, Token::TurnL, Token::Semicolon, Token::RBrace]);
    assert_eq!(lex("(1,-2)"),
               vec![Token::LParen,
                    Token::Number("1".to_string()),
                    Token::Comma,
                    Token::Number("-2".to_string()),
                    Token::RParen]);
}

#[test]
fn whitespace_separates_and_is_dropped() {
    assert_eq!(lex("  takeFuel \n\t wait  "), vec![Token::TakeFuel, Token::Wait]);
    assert!(lex(" \n ").is_empty());
    assert!(lex("").is_empty());
}

#[test]
fn keywords_need_exact_match() {
    assert_eq!(lex("loopy"), vec![word("loopy")]);
    assert_eq!(lex("Move"), vec![word("Move")]);
    assert_eq!(lex("turnLeft;"), vec![word("turnLeft"), Token::Semicolon]);
    assert_eq!(lex("12ab"), vec![word("12ab")]);
}

#[test]
fn anything_else_is_a_word() {
    assert_eq!(lex("foo+bar #! é"), vec![word("foo+bar"), word("#!"), word("é")]);
    assert_eq!(lex("-"), vec![word("-")]);
}

#[test]
fn tokens_carry_lines() {
    let lines: Vec<usize> = Tokenizer::new("move;\n\nturnR;\n  wait").map(|(_, line)| line).collect();

    assert_eq!(lines, vec![1, 1, 3, 3, 4]);
}

#[test]
fn tokens_render_as_written() {
    let source = "loop { move ; takeFuel ; 42 odd }";
    let rendered: Vec<String> = Tokenizer::new(source).map(|(token, _)| token.to_string()).collect();

    assert_eq!(rendered.join(" "), source);
}

#[test]
fn tokenizer_restarts_from_source() {
    let source = "wait; turnL;";
    let mut first = Tokenizer::new(source);
    first.next();

    assert_eq!(Tokenizer::new(source).count(), 4);
    assert_eq!(first.count(), 3);
}

#[test]
fn clone_looks_ahead_without_consuming() {
    let mut tokens = Tokenizer::new("move; wait;");
    let ahead: Vec<Token> = tokens.clone().map(|(token, _)| token).collect();

    assert_eq!(ahead.len(), 4);
    assert_eq!(tokens.next().map(|(token, _)| token), Some(Token::Move));
}
