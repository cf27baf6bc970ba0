//! Keyword resolution.
//!
//! Mini has five reserved words. Everything else an identifier scan
//! produces goes to the symbol table.

use mini_ir::TokenKind;

/// Look up a reserved keyword by text.
///
/// Uses the length as a first-pass filter: all keywords are 2-6 chars.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        2 if text == "if" => Some(TokenKind::If),
        3 if text == "int" => Some(TokenKind::Int),
        4 if text == "else" => Some(TokenKind::Else),
        5 if text == "while" => Some(TokenKind::While),
        6 if text == "return" => Some(TokenKind::Return),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
