use std::fmt::Display;

use crate::Span;

use super::{
    expressions::{BinaryExpr, NumberExpr, SymbolExpr},
    statements::{AssignmentStmt, PrintStmt},
};

/// Statement
///
/// A top-level statement of a program.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assignment(AssignmentStmt),
    Print(PrintStmt),
}

impl Stmt {
    /// Returns the span of the statement.
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Assignment(stmt) => &stmt.span,
            Stmt::Print(stmt) => &stmt.span,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Assignment(stmt) => write!(f, "let {} = {};", stmt.identifier, stmt.value),
            Stmt::Print(stmt) => write!(f, "print({});", stmt.expression),
        }
    }
}

/// Expression
///
/// Arithmetic expressions. Binary operations nest; literals and symbols are leaves.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(BinaryExpr),
    Number(NumberExpr),
    Symbol(SymbolExpr),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Binary(expr) => &expr.span,
            Expr::Number(expr) => &expr.span,
            Expr::Symbol(expr) => &expr.span,
        }
    }

    /// Replaces the span of the expression, e.g. to cover surrounding parentheses.
    pub fn with_span(mut self, span: Span) -> Expr {
        match &mut self {
            Expr::Binary(expr) => expr.span = span,
            Expr::Number(expr) => expr.span = span,
            Expr::Symbol(expr) => expr.span = span,
        }
        self
    }
}

/// Renders the expression fully parenthesised, so grouping is explicit.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Binary(expr) => {
                write!(f, "({} {} {})", expr.left, expr.operator, expr.right)
            }
            Expr::Number(expr) => write!(f, "{}", expr.value),
            Expr::Symbol(expr) => write!(f, "{}", expr.value),
        }
    }
}
