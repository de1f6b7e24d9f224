use crate::{tokens::tokens::Operator, Span};

use super::ast::Expr;

// LITERALS

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
    pub span: Span,
}

/// Symbol Expression
/// Represents a reference to a variable by name.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

// COMPLEX

/// Binary Expression
/// Represents an arithmetic operation between two expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Operator,
    pub right: Box<Expr>,
    pub span: Span,
}
