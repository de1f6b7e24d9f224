//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into a list of statements. Each grammar rule is a
//! function:
//!
//! ```text
//! program    := statement*
//! statement  := assignment | print_stmt
//! assignment := LET ID ASSIGN expr SEMICOLON
//! print_stmt := PRINT LPAREN expr RPAREN SEMICOLON
//! expr       := term ((PLUS | MINUS) term)*
//! term       := factor ((TIMES | DIVIDE) factor)*
//! factor     := NUMBER | ID | LPAREN expr RPAREN
//! ```
//!
//! Precedence comes from nesting `term` inside `expr`; both loops fold to
//! the left, so chains of equal precedence are left-associative.

pub mod expr;
pub mod parser;
pub mod stmt;
