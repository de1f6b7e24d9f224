use lazy_static::lazy_static;
use regex::Regex;
use std::{collections::HashMap, fmt::Display, rc::Rc};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

lazy_static! {
    pub static ref TAG_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("LET", TokenKind::Let);
        map.insert("ID", TokenKind::Id);
        map.insert("ASSIGN", TokenKind::Assign);
        map.insert("NUMBER", TokenKind::Number);
        map.insert("PLUS", TokenKind::Plus);
        map.insert("MINUS", TokenKind::Minus);
        map.insert("TIMES", TokenKind::Times);
        map.insert("DIVIDE", TokenKind::Divide);
        map.insert("LPAREN", TokenKind::LParen);
        map.insert("RPAREN", TokenKind::RParen);
        map.insert("PRINT", TokenKind::Print);
        map.insert("SEMICOLON", TokenKind::Semicolon);
        map
    };
    static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+(\\.[0-9]+)?$").unwrap();
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Let,
    Id,
    Assign,
    Number,
    Plus,
    Minus,
    Times,
    Divide,
    LParen,
    RParen,
    Print,
    Semicolon,
}

impl TokenKind {
    /// The tag the lexer uses for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            TokenKind::Let => "LET",
            TokenKind::Id => "ID",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Number => "NUMBER",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Divide => "DIVIDE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Print => "PRINT",
            TokenKind::Semicolon => "SEMICOLON",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Keyword {
    Let,
    Print,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Times,
    Divide,
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Times => "*",
            Operator::Divide => "/",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Punctuation {
    Assign,    // =
    Semicolon, // ;
    LParen,    // (
    RParen,    // )
}

/// Token payload. The kind of a token is derived from it.
#[derive(Debug, PartialEq, Clone)]
pub enum TokenValue {
    Keyword(Keyword),
    Identifier(String),
    Number(f64),
    Operator(Operator),
    Punctuation(Punctuation),
}

impl TokenValue {
    pub fn kind(&self) -> TokenKind {
        match self {
            TokenValue::Keyword(Keyword::Let) => TokenKind::Let,
            TokenValue::Keyword(Keyword::Print) => TokenKind::Print,
            TokenValue::Identifier(_) => TokenKind::Id,
            TokenValue::Number(_) => TokenKind::Number,
            TokenValue::Operator(Operator::Plus) => TokenKind::Plus,
            TokenValue::Operator(Operator::Minus) => TokenKind::Minus,
            TokenValue::Operator(Operator::Times) => TokenKind::Times,
            TokenValue::Operator(Operator::Divide) => TokenKind::Divide,
            TokenValue::Punctuation(Punctuation::Assign) => TokenKind::Assign,
            TokenValue::Punctuation(Punctuation::Semicolon) => TokenKind::Semicolon,
            TokenValue::Punctuation(Punctuation::LParen) => TokenKind::LParen,
            TokenValue::Punctuation(Punctuation::RParen) => TokenKind::RParen,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub value: TokenValue,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            TokenValue::Identifier(name) => write!(f, "{}({})", self.kind(), name),
            TokenValue::Number(value) => write!(f, "{}({})", self.kind(), value),
            _ => write!(f, "{}", self.kind()),
        }
    }
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        self.value.kind()
    }

    /// Builds a token from the lexer's boundary form: a kind tag and an
    /// optional lexeme. Identifier and number lexemes are validated here.
    ///
    /// # Arguments
    ///
    /// * `tag` - The upper-case kind tag, e.g. `"NUMBER"`
    /// * `lexeme` - The source text, required for `ID` and `NUMBER`
    /// * `index` - Index of the token in its stream
    /// * `file` - Name of the stream
    pub fn from_tag(
        tag: &str,
        lexeme: Option<&str>,
        index: usize,
        file: Rc<String>,
    ) -> Result<Token, Error> {
        let position = Position(index as u32, Rc::clone(&file));

        let kind = match TAG_LOOKUP.get(tag) {
            Some(kind) => *kind,
            None => {
                return Err(Error::new(
                    ErrorImpl::UnknownTokenKind { tag: tag.to_string() },
                    position,
                ))
            }
        };

        let value = match kind {
            TokenKind::Id => {
                let name = lexeme.ok_or_else(|| {
                    Error::new(ErrorImpl::MissingLexeme { kind }, position.clone())
                })?;

                if !IDENTIFIER_PATTERN.is_match(name) {
                    return Err(Error::new(
                        ErrorImpl::InvalidIdentifier { token: name.to_string() },
                        position,
                    ));
                }

                TokenValue::Identifier(name.to_string())
            }
            TokenKind::Number => {
                let text = lexeme.ok_or_else(|| {
                    Error::new(ErrorImpl::MissingLexeme { kind }, position.clone())
                })?;

                let parsed = if NUMBER_PATTERN.is_match(text) {
                    text.parse::<f64>().ok().filter(|value| value.is_finite())
                } else {
                    None
                };

                match parsed {
                    Some(value) => TokenValue::Number(value),
                    None => {
                        return Err(Error::new(
                            ErrorImpl::NumberParseError { token: text.to_string() },
                            position,
                        ))
                    }
                }
            }
            TokenKind::Let => TokenValue::Keyword(Keyword::Let),
            TokenKind::Print => TokenValue::Keyword(Keyword::Print),
            TokenKind::Plus => TokenValue::Operator(Operator::Plus),
            TokenKind::Minus => TokenValue::Operator(Operator::Minus),
            TokenKind::Times => TokenValue::Operator(Operator::Times),
            TokenKind::Divide => TokenValue::Operator(Operator::Divide),
            TokenKind::Assign => TokenValue::Punctuation(Punctuation::Assign),
            TokenKind::Semicolon => TokenValue::Punctuation(Punctuation::Semicolon),
            TokenKind::LParen => TokenValue::Punctuation(Punctuation::LParen),
            TokenKind::RParen => TokenValue::Punctuation(Punctuation::RParen),
        };

        Ok(MK_TOKEN!(value, index, file))
    }
}
