//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SIMPLE_TOKEN!` - Consumes one byte and creates a payload-free Token

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's TokenValue
/// * `$position` - Position of the token's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::NumberLiteral, TokenValue::Number(42), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}

/// Records the reader position, advances past one byte and creates a
/// payload-free token of the given kind at the recorded position.
///
/// # Example
///
/// ```ignore
/// CharCode::Comma => Some(MK_SIMPLE_TOKEN!(self.reader, TokenKind::Comma)),
/// ```
#[macro_export]
macro_rules! MK_SIMPLE_TOKEN {
    ($reader:expr, $kind:expr) => {{
        let position = $reader.position();
        $reader.advance();
        $crate::MK_TOKEN!($kind, $crate::lexer::tokens::TokenValue::None, position)
    }};
}
