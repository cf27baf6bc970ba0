//! String literal scanning and escape processing.
//!
//! Either quote character opens a literal, and only the same character
//! closes it. Escapes: `\n` `\t` `\r` `\"` `\'` `\\`; any other escaped
//! character stands for itself.

use mini_ir::{ConstValue, ConstantTable, Token, TokenKind};
use mini_lexer_core::SourceCursor;

use crate::lex_error::LexError;
use crate::token_at;

/// Resolve the character after a backslash.
#[inline]
fn resolve_escape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        // `"`, `'`, `\` and anything unrecognized pass through.
        other => other,
    }
}

/// Scan a string literal starting at its opening quote.
///
/// A raw newline or end of input before the closing quote ends the literal
/// early with an error at the opening quote. A raw newline also records an
/// error of its own, at the newline, which is left for the dispatcher. An
/// escaped newline is ordinary content.
/// The unescaped text is always registered as a `string` constant.
pub(crate) fn scan_string(
    cursor: &mut SourceCursor<'_>,
    constants: &mut ConstantTable,
    errors: &mut Vec<LexError>,
) -> Token {
    let start = cursor.position();
    let Some(quote) = cursor.advance() else {
        return token_at(TokenKind::StringLit, "", start, start.offset);
    };

    let mut content = String::new();
    let mut closed = false;
    while let Some(c) = cursor.current() {
        if c == quote {
            cursor.advance();
            closed = true;
            break;
        }
        if c == '\n' {
            errors.push(LexError::unterminated_string(cursor.position()));
            break;
        }
        cursor.advance();
        if c == '\\' {
            let Some(escaped) = cursor.advance() else {
                break;
            };
            content.push(resolve_escape(escaped));
        } else {
            content.push(c);
        }
    }

    if !closed {
        errors.push(LexError::unterminated_string(start));
    }

    let index = constants.intern(ConstValue::Str(content.clone()));
    token_at(TokenKind::StringLit, content, start, cursor.offset()).with_index(Some(index))
}
