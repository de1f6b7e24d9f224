//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::tokens::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

fn position(index: u32) -> Position {
    Position(index, Rc::new("test.tokens".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnknownTokenKind {
            tag: "WHILE".to_string(),
        },
        position(10),
    );

    assert_eq!(error.get_error_name(), "UnknownTokenKind");
    assert!(!error.is_syntax_error());
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "RPAREN".to_string(),
        },
        position(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.tokens");
}

#[test]
fn test_expected_token_error() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: TokenKind::Id,
            found: "ASSIGN".to_string(),
        },
        position(1),
    );

    assert_eq!(error.get_error_name(), "ExpectedToken");
    assert!(error.is_syntax_error());
    assert_eq!(error.to_string(), "expected ID, got ASSIGN (token 1)");
}

#[test]
fn test_end_of_input_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedEndOfInput {
            expected: "SEMICOLON".to_string(),
        },
        position(4),
    );

    assert!(error.is_syntax_error());
    assert_eq!(
        error.to_string(),
        "expected SEMICOLON, got end of input (token 4)"
    );
}

#[test]
fn test_unknown_statement_error() {
    let error = Error::new(
        ErrorImpl::UnknownStatement {
            token: "NUMBER(5)".to_string(),
        },
        position(0),
    );

    assert_eq!(error.get_error_name(), "UnknownStatement");
    assert!(error.is_syntax_error());
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "1.2.3".to_string(),
        },
        position(0),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert!(!error.is_syntax_error());
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnknownTokenKind {
            tag: "@".to_string(),
        },
        position(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::MissingLexeme {
            kind: TokenKind::Number,
        },
        position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "`NUMBER` tokens need a lexeme"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
