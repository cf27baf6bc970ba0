//! Forward-only cursor with line/column tracking.
//!
//! The cursor owns no text; it borrows the source and records the byte
//! offset of the current character together with its 1-based line and
//! column. Every method that consumes input goes through the same column
//! arithmetic:
//!
//! - `\n`: next line, column 1
//! - `\t`: next tab stop, `column + (TAB_WIDTH - (column - 1) % TAB_WIDTH)`
//! - anything else: column + 1

/// Distance between tab stops, in columns.
pub const TAB_WIDTH: u32 = 4;

/// Column reached after consuming `ch` at `column` (same line).
///
/// Newlines are handled by the caller since they also bump the line.
#[inline]
pub fn next_column(column: u32, ch: char) -> u32 {
    if ch == '\t' {
        column + (TAB_WIDTH - (column - 1) % TAB_WIDTH)
    } else {
        column + 1
    }
}

/// Snapshot of a cursor location.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Byte offset into the source.
    pub offset: u32,
    /// 1-based line.
    pub line: u32,
    /// 1-based, tab-expanded column.
    pub column: u32,
}

/// Cursor over borrowed source text.
#[derive(Clone, Debug)]
pub struct SourceCursor<'src> {
    source: &'src str,
    /// Byte offset of the current character.
    pos: usize,
    line: u32,
    column: u32,
}

impl<'src> SourceCursor<'src> {
    /// Create a cursor at the start of `source` (line 1, column 1).
    pub fn new(source: &'src str) -> Self {
        SourceCursor {
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// The character under the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character `k` positions ahead without consuming anything.
    ///
    /// `peek(0)` is the current character. Returns `None` past the end.
    #[inline]
    pub fn peek(&self, k: usize) -> Option<char> {
        self.rest().chars().nth(k)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Consume the current character, returning it.
    ///
    /// Does nothing and returns `None` at end of input.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.current()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column = next_column(self.column, ch);
        }
        Some(ch)
    }

    /// Consume the current character if it equals `expected`.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume characters while `pred` holds.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.current() {
            if !pred(ch) {
                break;
            }
            self.advance();
        }
    }

    /// Consume through the next `\n` (inclusive), or to end of input.
    ///
    /// Uses `memchr` to find the newline: everything before it is skipped
    /// in one jump, since the column resets once the newline is consumed.
    pub fn eat_through_newline(&mut self) {
        let rest = &self.source.as_bytes()[self.pos..];
        if let Some(offset) = memchr::memchr(b'\n', rest) {
            self.pos += offset + 1;
            self.line += 1;
            self.column = 1;
        } else {
            self.eat_while(|_| true);
        }
    }

    /// Byte offset of the current character.
    ///
    /// Saturates at `u32::MAX`; sources over 4 GiB are unsupported.
    #[inline]
    pub fn offset(&self) -> u32 {
        u32::try_from(self.pos).unwrap_or(u32::MAX)
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Snapshot of the current location.
    #[inline]
    pub fn position(&self) -> Position {
        Position {
            offset: self.offset(),
            line: self.line,
            column: self.column,
        }
    }

    /// Source text between two byte offsets.
    ///
    /// # Contract
    ///
    /// Offsets must come from [`offset()`](Self::offset) or
    /// [`position()`](Self::position), which always sit on character
    /// boundaries.
    pub fn slice(&self, start: u32, end: u32) -> &'src str {
        let source: &'src str = self.source;
        &source[start as usize..end as usize]
    }

    /// Source text from `start` up to the current position.
    pub fn slice_from(&self, start: u32) -> &'src str {
        self.slice(start, self.offset())
    }

    #[inline]
    fn rest(&self) -> &'src str {
        let source: &'src str = self.source;
        &source[self.pos..]
    }
}

#[cfg(test)]
mod tests;
