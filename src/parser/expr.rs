use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, NumberExpr, SymbolExpr},
    },
    errors::errors::{Error, ErrorImpl},
    tokens::tokens::{Operator, Punctuation, TokenKind, TokenValue},
    Span,
};

use super::parser::Parser;

/// expr := term ((PLUS | MINUS) term)*
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_chain(parser, &[Operator::Plus, Operator::Minus], parse_term)
}

/// term := factor ((TIMES | DIVIDE) factor)*
pub fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_chain(parser, &[Operator::Times, Operator::Divide], parse_factor)
}

/// Parses `operand (op operand)*` for the given operators, folding each new
/// operand onto the tree built so far. The result is left-associative.
fn parse_binary_chain(
    parser: &mut Parser,
    operators: &[Operator],
    parse_operand: fn(&mut Parser) -> Result<Expr, Error>,
) -> Result<Expr, Error> {
    let mut left = parse_operand(parser)?;

    while let Some(operator) = current_operator(parser, operators) {
        parser.advance();
        let right = parse_operand(parser)?;

        left = Expr::Binary(BinaryExpr {
            span: Span {
                start: left.get_span().start.clone(),
                end: right.get_span().end.clone(),
            },
            left: Box::new(left),
            operator,
            right: Box::new(right),
        });
    }

    Ok(left)
}

fn current_operator(parser: &Parser, operators: &[Operator]) -> Option<Operator> {
    match parser.current_token().map(|token| &token.value) {
        Some(TokenValue::Operator(operator)) if operators.contains(operator) => Some(*operator),
        _ => None,
    }
}

/// factor := NUMBER | ID | LPAREN expr RPAREN
pub fn parse_factor(parser: &mut Parser) -> Result<Expr, Error> {
    let token = match parser.current_token() {
        Some(token) => token.clone(),
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: String::from("an expression"),
                },
                parser.get_position(),
            ))
        }
    };

    match token.value {
        TokenValue::Number(value) => {
            parser.advance();
            Ok(Expr::Number(NumberExpr {
                value,
                span: token.span,
            }))
        }
        TokenValue::Identifier(name) => {
            parser.advance();
            Ok(Expr::Symbol(SymbolExpr {
                value: name,
                span: token.span,
            }))
        }
        TokenValue::Punctuation(Punctuation::LParen) => {
            parser.enter_group()?;
            parser.advance();
            let expr = parse_expr(parser)?;
            let close = parser.expect(TokenKind::RParen)?;
            parser.exit_group();

            Ok(expr.with_span(Span {
                start: token.span.start,
                end: close.span.end,
            }))
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.to_string(),
            },
            parser.get_position(),
        )),
    }
}
