//! Maximal-munch operator matching.
//!
//! For a lead character the two-character form is tried first; only when
//! the pair does not exist does the single-character form apply. `!`, `&`
//! and `|` have no single form in Mini.

use mini_ir::{Token, TokenKind};
use mini_lexer_core::SourceCursor;

use crate::lex_error::LexError;
use crate::token_at;

/// Characters that may start an operator handled here.
#[inline]
pub(crate) fn is_operator_lead(c: char) -> bool {
    matches!(c, '=' | '!' | '<' | '>' | '&' | '|' | '+' | '-')
}

fn pair(first: char, second: char) -> Option<TokenKind> {
    match (first, second) {
        ('=', '=') => Some(TokenKind::EqEq),
        ('!', '=') => Some(TokenKind::NotEq),
        ('<', '=') => Some(TokenKind::LtEq),
        ('>', '=') => Some(TokenKind::GtEq),
        ('&', '&') => Some(TokenKind::AmpAmp),
        ('|', '|') => Some(TokenKind::PipePipe),
        ('+', '+') => Some(TokenKind::PlusPlus),
        ('-', '-') => Some(TokenKind::MinusMinus),
        _ => None,
    }
}

fn single(c: char) -> Option<TokenKind> {
    match c {
        '=' => Some(TokenKind::Assign),
        '<' => Some(TokenKind::Lt),
        '>' => Some(TokenKind::Gt),
        '+' => Some(TokenKind::Plus),
        '-' => Some(TokenKind::Minus),
        _ => None,
    }
}

/// The two-character operator a lone lead was expected to start.
fn expected_pair(c: char) -> &'static str {
    match c {
        '!' => "!=",
        '&' => "&&",
        _ => "||",
    }
}

/// Match an operator at an operator-lead character.
///
/// Returns `None` (after consuming the character and pushing an error) for
/// a lone `!`, `&` or `|`.
pub(crate) fn scan_operator(
    cursor: &mut SourceCursor<'_>,
    errors: &mut Vec<LexError>,
) -> Option<Token> {
    let start = cursor.position();
    let first = cursor.advance()?;

    if let Some(kind) = cursor.current().and_then(|second| pair(first, second)) {
        cursor.advance();
        let end = cursor.offset();
        return Some(token_at(kind, cursor.slice(start.offset, end), start, end));
    }

    if let Some(kind) = single(first) {
        let end = cursor.offset();
        return Some(token_at(kind, cursor.slice(start.offset, end), start, end));
    }

    errors.push(LexError::unpaired_operator(start, first, expected_pair(first)));
    None
}
