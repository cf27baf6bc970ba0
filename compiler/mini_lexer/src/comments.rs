//! Comment skipping.
//!
//! Comments produce no tokens. `//` runs through the end of the line,
//! newline included; `/* ... */` does not nest.

use mini_lexer_core::SourceCursor;

use crate::lex_error::LexError;

/// `true` when the cursor sits on `/*`.
#[inline]
pub(crate) fn at_block_comment(cursor: &SourceCursor<'_>) -> bool {
    cursor.current() == Some('/') && cursor.peek(1) == Some('*')
}

/// `true` when the cursor sits on `//`.
#[inline]
pub(crate) fn at_line_comment(cursor: &SourceCursor<'_>) -> bool {
    cursor.current() == Some('/') && cursor.peek(1) == Some('/')
}

/// Skip a block comment starting at `/*`.
///
/// Without a closing `*/` the comment swallows the rest of the input and an
/// error is pushed at the opening delimiter.
pub(crate) fn skip_block_comment(cursor: &mut SourceCursor<'_>, errors: &mut Vec<LexError>) {
    let start = cursor.position();
    cursor.advance();
    cursor.advance();

    while let Some(c) = cursor.advance() {
        if c == '*' && cursor.eat('/') {
            return;
        }
    }
    errors.push(LexError::unclosed_block_comment(start));
}

/// Skip a line comment starting at `//`, through the newline.
pub(crate) fn skip_line_comment(cursor: &mut SourceCursor<'_>) {
    cursor.eat_through_newline();
}
