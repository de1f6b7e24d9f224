//! Abstract Syntax Tree (AST) definitions.
//!
//! This module defines the node types produced by the parser:
//!
//! - Statements: assignments and print statements
//! - Expressions: binary operations, number literals and variable references
//!
//! Every node owns its children outright and is never mutated after the
//! parser builds it.

pub mod ast;
pub mod expressions;
pub mod statements;
