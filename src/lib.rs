#![allow(clippy::module_inception)]

use std::{path::Path, rc::Rc};

use crate::{
    errors::errors::{Error, ErrorTip},
    tokens::stream::token_lines,
};

pub mod ast;
pub mod errors;
pub mod macros;
pub mod parser;
pub mod tokens;

extern crate regex;

/// A token index into a named token stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

/// Half-open range of token positions, `start..end`.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Name a token stream is reported under: the file name of its path.
pub fn stream_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

/// Finds the dump line holding the token at `position`.
///
/// Returns the 1-based line number and the trimmed line text, or `None` when
/// the position is past the last token (an error at end of input).
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String)> {
    token_lines(source)
        .nth(position as usize)
        .map(|(line_index, line)| (line_index + 1, line.to_string()))
}

/// Renders an error against the dump it came from.
///
/// Errors at end of input point just past the last token line.
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: ExpectedToken (Expected `ID`, found `ASSIGN`)
        -> program.tokens
          |
        3 | ASSIGN
          | ^^^^^^
    */

    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    output.push_str(&format!("-> {}\n", file));

    let (marked, at_end) = match get_line_at_position(source, error.get_position().0) {
        Some(marked) => (Some(marked), false),
        None => (
            token_lines(source)
                .last()
                .map(|(line_index, line)| (line_index + 1, line.to_string())),
            true,
        ),
    };

    if let Some((line, line_text)) = marked {
        let line_str = line.to_string();
        let padding = line_str.len() + 2;

        output.push_str(&format!("{:>padding$}\n", "|"));
        output.push_str(&format!("{} | {}\n", line_str, line_text));

        if at_end {
            let offset = line_text.len() + 1;
            output.push_str(&format!("{:>padding$} {:>offset$} end of input\n", "|", "^"));
        } else {
            let arrows = line_text.len();
            output.push_str(&format!("{:>padding$} {:^>arrows$}\n", "|", "^"));
        }
    }

    output
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    eprint!("{}", format_error(error, source, file));
}
