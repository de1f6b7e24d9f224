use crate::{
    ast::{
        ast::Stmt,
        statements::{AssignmentStmt, PrintStmt},
    },
    errors::errors::{Error, ErrorImpl},
    tokens::tokens::{TokenKind, TokenValue},
    Span,
};

use super::{expr::parse_expr, parser::Parser};

/// statement := assignment | print_stmt
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        Some(TokenKind::Let) => Ok(Stmt::Assignment(parse_assignment_stmt(parser)?)),
        Some(TokenKind::Print) => Ok(Stmt::Print(parse_print_stmt(parser)?)),
        _ => {
            let token = parser
                .current_token()
                .map(ToString::to_string)
                .unwrap_or_else(|| String::from("end of input"));

            Err(Error::new(
                ErrorImpl::UnknownStatement { token },
                parser.get_position(),
            ))
        }
    }
}

/// assignment := LET ID ASSIGN expr SEMICOLON
pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<AssignmentStmt, Error> {
    let start_token = parser.expect(TokenKind::Let)?;

    let identifier = match parser.expect(TokenKind::Id)?.value {
        TokenValue::Identifier(name) => name,
        _ => unreachable!("ID tokens always carry an identifier"),
    };

    parser.expect(TokenKind::Assign)?;
    let value = parse_expr(parser)?;
    let end_token = parser.expect(TokenKind::Semicolon)?;

    Ok(AssignmentStmt {
        identifier,
        value,
        span: Span {
            start: start_token.span.start,
            end: end_token.span.end,
        },
    })
}

/// print_stmt := PRINT LPAREN expr RPAREN SEMICOLON
pub fn parse_print_stmt(parser: &mut Parser) -> Result<PrintStmt, Error> {
    let start_token = parser.expect(TokenKind::Print)?;
    parser.expect(TokenKind::LParen)?;
    let expression = parse_expr(parser)?;
    parser.expect(TokenKind::RParen)?;
    let end_token = parser.expect(TokenKind::Semicolon)?;

    Ok(PrintStmt {
        expression,
        span: Span {
            start: start_token.span.start,
            end: end_token.span.end,
        },
    })
}
