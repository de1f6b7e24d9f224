use std::fmt::Display;

use thiserror::Error;

use crate::{tokens::tokens::TokenKind, Position};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} (token {})", .position.0)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Whether the error came from the grammar rather than from building tokens.
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::ExpectedToken { .. }
                | ErrorImpl::UnexpectedEndOfInput { .. }
                | ErrorImpl::UnknownStatement { .. }
                | ErrorImpl::UnexpectedToken { .. }
                | ErrorImpl::NestingTooDeep { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::UnknownStatement { .. } => "UnknownStatement",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::UnknownTokenKind { .. } => "UnknownTokenKind",
            ErrorImpl::MissingLexeme { .. } => "MissingLexeme",
            ErrorImpl::InvalidIdentifier { .. } => "InvalidIdentifier",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::ExpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}`, found `{}`",
                expected, found
            )),
            ErrorImpl::UnexpectedEndOfInput { expected } => ErrorTip::Suggestion(format!(
                "Expected {} but the token stream ended, is a statement cut short?",
                expected
            )),
            ErrorImpl::UnknownStatement { token } => ErrorTip::Suggestion(format!(
                "Statements start with `LET` or `PRINT`, found `{}`",
                token
            )),
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected a number, identifier or `(`",
                token
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Parentheses nest deeper than {} levels, split the expression up",
                limit
            )),
            ErrorImpl::UnknownTokenKind { .. } => ErrorTip::None,
            ErrorImpl::MissingLexeme { kind } => {
                ErrorTip::Suggestion(format!("`{}` tokens need a lexeme", kind))
            }
            ErrorImpl::InvalidIdentifier { token } => ErrorTip::Suggestion(format!(
                "Invalid identifier: `{}`, identifiers start with a letter or `_`",
                token
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, expected digits with an optional fraction",
                token
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected {expected}, got {found}")]
    ExpectedToken { expected: TokenKind, found: String },
    #[error("expected {expected}, got end of input")]
    UnexpectedEndOfInput { expected: String },
    #[error("unknown statement starting with {token}")]
    UnknownStatement { token: String },
    #[error("unexpected token: {token}")]
    UnexpectedToken { token: String },
    #[error("parentheses nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("unknown token kind: {tag:?}")]
    UnknownTokenKind { tag: String },
    #[error("missing lexeme for {kind} token")]
    MissingLexeme { kind: TokenKind },
    #[error("invalid identifier: {token:?}")]
    InvalidIdentifier { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
}
