//! Utility macros for the parser.
//!
//! - `MK_TOKEN!` - Creates a Token instance spanning a single stream slot

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$value` - The token's payload
/// * `$index` - Index of the token in its stream
/// * `$file` - `Rc<String>` naming the stream the token came from
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenValue::Number(42.0), 0, file);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($value:expr, $index:expr, $file:expr) => {
        $crate::tokens::tokens::Token {
            value: $value,
            span: $crate::Span {
                start: $crate::Position($index as u32, ::std::rc::Rc::clone(&$file)),
                end: $crate::Position(($index + 1) as u32, ::std::rc::Rc::clone(&$file)),
            },
        }
    };
}
