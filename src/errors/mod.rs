//! Error types and error handling for the parser.
//!
//! This module defines the single error type shared by token construction
//! and parsing. It includes:
//!
//! - Error structures with stream position information
//! - Specific error variants for each failure
//! - Error names and suggestions for diagnostic output

pub mod errors;

#[cfg(test)]
mod tests;
