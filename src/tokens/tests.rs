//! Unit tests for the token model.
//!
//! Covers tag resolution, lexeme validation and the dump reader.

use std::rc::Rc;

use super::{
    stream::read_token_stream,
    tokens::{Keyword, Operator, Punctuation, Token, TokenKind, TokenValue, TAG_LOOKUP},
};

fn file() -> Rc<String> {
    Rc::new("test.tokens".to_string())
}

#[test]
fn test_every_kind_round_trips_through_its_tag() {
    assert_eq!(TAG_LOOKUP.len(), 12);

    for (tag, kind) in TAG_LOOKUP.iter() {
        assert_eq!(kind.tag(), *tag);
        assert_eq!(kind.to_string(), *tag);
    }
}

#[test]
fn test_from_tag_keywords_and_symbols() {
    let cases = [
        ("LET", TokenValue::Keyword(Keyword::Let)),
        ("PRINT", TokenValue::Keyword(Keyword::Print)),
        ("PLUS", TokenValue::Operator(Operator::Plus)),
        ("MINUS", TokenValue::Operator(Operator::Minus)),
        ("TIMES", TokenValue::Operator(Operator::Times)),
        ("DIVIDE", TokenValue::Operator(Operator::Divide)),
        ("ASSIGN", TokenValue::Punctuation(Punctuation::Assign)),
        ("SEMICOLON", TokenValue::Punctuation(Punctuation::Semicolon)),
        ("LPAREN", TokenValue::Punctuation(Punctuation::LParen)),
        ("RPAREN", TokenValue::Punctuation(Punctuation::RParen)),
    ];

    for (tag, value) in cases {
        let token = Token::from_tag(tag, None, 0, file()).unwrap();
        assert_eq!(token.value, value);
        assert_eq!(token.kind().tag(), tag);
    }
}

#[test]
fn test_from_tag_identifier() {
    let token = Token::from_tag("ID", Some("total_2"), 3, file()).unwrap();

    assert_eq!(token.kind(), TokenKind::Id);
    assert_eq!(token.value, TokenValue::Identifier("total_2".to_string()));
    assert_eq!(token.span.start.0, 3);
    assert_eq!(token.span.end.0, 4);
    assert_eq!(token.to_string(), "ID(total_2)");
}

#[test]
fn test_from_tag_numbers() {
    let token = Token::from_tag("NUMBER", Some("42"), 0, file()).unwrap();
    assert_eq!(token.value, TokenValue::Number(42.0));
    assert_eq!(token.to_string(), "NUMBER(42)");

    let token = Token::from_tag("NUMBER", Some("3.25"), 0, file()).unwrap();
    assert_eq!(token.value, TokenValue::Number(3.25));
}

#[test]
fn test_from_tag_rejects_bad_numbers() {
    for lexeme in ["abc", "1.", ".5", "1e3", "-4", "1.2.3"] {
        let error = Token::from_tag("NUMBER", Some(lexeme), 7, file()).unwrap_err();
        assert_eq!(error.get_error_name(), "NumberParseError");
        assert_eq!(error.get_position().0, 7);
        assert!(!error.is_syntax_error());
    }
}

#[test]
fn test_from_tag_rejects_bad_identifiers() {
    for lexeme in ["1abc", "a-b", "x y"] {
        let error = Token::from_tag("ID", Some(lexeme), 0, file()).unwrap_err();
        assert_eq!(error.get_error_name(), "InvalidIdentifier");
    }
}

#[test]
fn test_from_tag_missing_lexeme() {
    let error = Token::from_tag("ID", None, 0, file()).unwrap_err();
    assert_eq!(error.get_error_name(), "MissingLexeme");

    let error = Token::from_tag("NUMBER", None, 0, file()).unwrap_err();
    assert_eq!(error.get_error_name(), "MissingLexeme");
}

#[test]
fn test_from_tag_unknown_kind() {
    let error = Token::from_tag("WHILE", None, 0, file()).unwrap_err();
    assert_eq!(error.get_error_name(), "UnknownTokenKind");

    // Tags are case sensitive.
    assert!(Token::from_tag("let", None, 0, file()).is_err());
}

#[test]
fn test_read_token_stream() {
    let dump = "# LET x = 2;\nLET\n\n  ID   x  \nASSIGN\nNUMBER 2\nSEMICOLON\n";
    let tokens = read_token_stream(dump, file()).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(Token::kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Id,
            TokenKind::Assign,
            TokenKind::Number,
            TokenKind::Semicolon
        ]
    );
    assert_eq!(tokens[1].value, TokenValue::Identifier("x".to_string()));

    for (index, token) in tokens.iter().enumerate() {
        assert_eq!(token.span.start.0 as usize, index);
    }
}

#[test]
fn test_read_empty_token_stream() {
    assert!(read_token_stream("", file()).unwrap().is_empty());
    assert!(read_token_stream("# nothing here\n\n", file()).unwrap().is_empty());
}

#[test]
fn test_read_token_stream_reports_index_of_bad_token() {
    let error = read_token_stream("LET\nID x\nNUMBER nope\n", file()).unwrap_err();

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.get_position().0, 2);
}
