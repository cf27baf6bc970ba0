//! Identifier and keyword scanning.

use mini_ir::{SymbolTable, Token, TokenKind};
use mini_lexer_core::SourceCursor;

use crate::{keywords, token_at};

#[inline]
pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

#[inline]
pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Scan a maximal alphanumeric/underscore run.
///
/// Keywords come back without a table index; any other name is registered
/// in `symbols` and the token carries its index.
pub(crate) fn scan_identifier(cursor: &mut SourceCursor<'_>, symbols: &mut SymbolTable) -> Token {
    let start = cursor.position();
    cursor.eat_while(is_ident_continue);
    let text = cursor.slice_from(start.offset);
    let end = cursor.offset();

    if let Some(kind) = keywords::lookup(text) {
        return token_at(kind, text, start, end);
    }
    let index = symbols.intern(text);
    token_at(TokenKind::Ident, text, start, end).with_index(Some(index))
}

#[cfg(test)]
mod tests;
