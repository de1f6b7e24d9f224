use std::rc::Rc;

use crate::errors::errors::Error;

use super::tokens::Token;

/// Reads a token dump into a token stream.
///
/// A dump holds one token per line, written as its kind tag optionally
/// followed by whitespace and a lexeme:
///
/// ```text
/// # LET x = 2;
/// LET
/// ID x
/// ASSIGN
/// NUMBER 2
/// SEMICOLON
/// ```
///
/// Blank lines and lines starting with `#` are skipped. Token positions
/// are indices into the resulting stream, not line numbers.
pub fn read_token_stream(source: &str, file: Rc<String>) -> Result<Vec<Token>, Error> {
    let mut tokens = vec![];

    for (_, line) in token_lines(source) {
        let (tag, lexeme) = split_line(line);
        let token = Token::from_tag(tag, lexeme, tokens.len(), Rc::clone(&file))?;
        tokens.push(token);
    }

    Ok(tokens)
}

/// Yields the lines of a dump that describe a token, in stream order, as
/// `(line_index, trimmed_line)`. The n-th item is the n-th token.
pub fn token_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source
        .lines()
        .map(str::trim)
        .enumerate()
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

fn split_line(line: &str) -> (&str, Option<&str>) {
    match line.split_once(char::is_whitespace) {
        Some((tag, rest)) => {
            let rest = rest.trim();
            (tag, if rest.is_empty() { None } else { Some(rest) })
        }
        None => (line, None),
    }
}
