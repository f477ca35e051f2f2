use pretty_assertions::assert_eq;

use super::*;

#[test]
fn quoted_token_keeps_delimiters() {
    let tok = Token::quoted("hello world");
    assert_eq!(tok.text(), "\"hello world\"");
    assert_eq!(tok.kind(), TokenKind::Str);
    assert!(tok.is_str_literal());
}

#[test]
fn string_body_strips_quotes() {
    assert_eq!(Token::quoted("hello").string_body(), "hello");
    assert_eq!(Token::quoted("").string_body(), "");
}

#[test]
fn string_body_of_word_is_unchanged() {
    assert_eq!(Token::word("print").string_body(), "print");
}

#[test]
fn digits_classification() {
    assert!(Token::word("0").is_digits());
    assert!(Token::word("1234567890").is_digits());
    assert!(!Token::word("x1").is_digits());
    assert!(!Token::word("12a").is_digits());
    assert!(!Token::word("").is_digits());
    // A quoted "123" is a string literal, not a number.
    assert!(!Token::quoted("123").is_digits());
}

#[test]
fn text_equality_helper() {
    assert!(Token::word("print").is("print"));
    assert!(!Token::word("print").is("Print"));
    assert!(Token::rel_op("==").is("=="));
}

#[test]
fn display_is_the_raw_text() {
    assert_eq!(Token::punct('(').to_string(), "(");
    assert_eq!(Token::quoted("hi").to_string(), "\"hi\"");
}
