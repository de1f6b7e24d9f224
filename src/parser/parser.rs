//! Parser state and the parsing entry point.
//!
//! The parser holds nothing but the token stream and a cursor into it.
//! The cursor only moves forward; every grammar rule picks its production
//! from the current token alone, so no state is ever saved or restored.

use std::rc::Rc;

use crate::{
    ast::ast::Stmt,
    errors::errors::{Error, ErrorImpl},
    tokens::tokens::{Token, TokenKind},
    Position,
};

use super::stmt::parse_stmt;

/// Deepest parenthesis nesting accepted before parsing gives up.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream, `0..=tokens.len()`
    pos: usize,
    /// The name of the stream being parsed
    file: Rc<String>,
    /// Number of parenthesised groups currently open
    depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse
    /// * `file` - Reference-counted string naming the token stream
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
            depth: 0,
        }
    }

    /// Returns the current token without advancing, or `None` past the end.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(Token::kind)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `error` - Optional custom error to return if expectation fails
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) and advances if the current token matches,
    /// otherwise returns an Error without moving the cursor.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let found = match self.current_token() {
            Some(token) if token.kind() == expected_kind => {
                let token = token.clone();
                self.pos += 1;
                return Ok(token);
            }
            found => found.map(ToString::to_string),
        };

        if let Some(error) = error {
            return Err(error);
        }

        let error_impl = match found {
            Some(found) => ErrorImpl::ExpectedToken {
                expected: expected_kind,
                found,
            },
            None => ErrorImpl::UnexpectedEndOfInput {
                expected: expected_kind.to_string(),
            },
        };

        Err(Error::new(error_impl, self.get_position()))
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Opens a parenthesised group, failing once nesting passes `MAX_NESTING_DEPTH`.
    pub fn enter_group(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn exit_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns the number of open parenthesised groups.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the cursor as an index into the token stream.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the number of tokens in the stream.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the current position in the token stream.
    pub fn get_position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }
}

/// Parses a stream of tokens into a list of statements.
///
/// This is the main entry point for parsing. Statements are parsed until
/// the stream is exhausted; the first error aborts the whole parse and no
/// partial program is returned.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse
/// * `file` - Reference-counted string naming the token stream
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with state after parsing)
/// - Result containing either the statements in source order or an Error
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> (Parser, Result<Vec<Stmt>, Error>) {
    let mut parser = Parser::new(tokens, file);
    let result = parse_program(&mut parser);

    (parser, result)
}

fn parse_program(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    let mut body = vec![];

    while parser.has_tokens() {
        body.push(parse_stmt(parser)?);
    }

    Ok(body)
}
