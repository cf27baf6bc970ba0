//! Numeric literal scanning.
//!
//! Grammar, decided left to right with single-character lookahead:
//!
//! ```text
//! number   = digits [ "." digits ] [ exponent ]
//! exponent = ( "e" | "E" ) [ "+" | "-" ] digits
//! ```
//!
//! A `.` joins the literal only when a digit follows it, so `1.` and `1..2`
//! leave the dot for the dispatcher. A fraction or an exponent makes the
//! literal a float.

use mini_ir::{ConstValue, ConstantTable, Token, TokenKind};
use mini_lexer_core::SourceCursor;

use crate::lex_error::LexError;
use crate::token_at;

/// Scan a numeric literal starting at an ASCII digit.
///
/// Well-formed literals are registered in `constants` as `int` or `float`.
/// A malformed exponent or a value that does not convert yields a
/// `FloatLit` token without a table index, plus an error.
pub(crate) fn scan_number(
    cursor: &mut SourceCursor<'_>,
    constants: &mut ConstantTable,
    errors: &mut Vec<LexError>,
) -> Token {
    let start = cursor.position();
    let mut is_float = false;

    cursor.eat_while(|c| c.is_ascii_digit());

    if cursor.current() == Some('.') && cursor.peek(1).is_some_and(|c| c.is_ascii_digit()) {
        cursor.advance();
        cursor.eat_while(|c| c.is_ascii_digit());
        is_float = true;
    }

    if matches!(cursor.current(), Some('e' | 'E')) {
        cursor.advance();
        if matches!(cursor.current(), Some('+' | '-')) {
            cursor.advance();
        }
        if !cursor.current().is_some_and(|c| c.is_ascii_digit()) {
            errors.push(LexError::malformed_exponent(start));
            let text = cursor.slice_from(start.offset);
            return token_at(TokenKind::FloatLit, text, start, cursor.offset());
        }
        cursor.eat_while(|c| c.is_ascii_digit());
        is_float = true;
    }

    let text = cursor.slice_from(start.offset);
    let end = cursor.offset();

    let (kind, value) = if is_float {
        (TokenKind::FloatLit, text.parse::<f64>().ok().map(ConstValue::Float))
    } else {
        (TokenKind::IntLit, text.parse::<i64>().ok().map(ConstValue::Int))
    };

    match value {
        Some(value) => {
            let index = constants.intern(value);
            token_at(kind, text, start, end).with_index(Some(index))
        }
        None => {
            errors.push(LexError::invalid_number(start, text));
            token_at(TokenKind::FloatLit, text, start, end)
        }
    }
}
