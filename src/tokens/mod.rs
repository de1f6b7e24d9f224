//! Token model shared with the external lexer.
//!
//! Tokens arrive already classified. This module holds:
//!
//! - The closed set of token kinds the grammar understands
//! - Typed token payloads, validated when a token is built
//! - A reader for the line-oriented token dump format

pub mod stream;
pub mod tokens;

#[cfg(test)]
mod tests;
