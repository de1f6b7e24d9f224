use crate::Span;

use super::ast::Expr;

/// `LET name = value;`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub identifier: String,
    pub value: Expr,
    pub span: Span,
}

/// `PRINT(expression);`
#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub expression: Expr,
    pub span: Span,
}
