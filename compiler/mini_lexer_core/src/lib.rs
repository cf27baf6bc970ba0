//! Low-level source cursor for the Mini lexer.
//!
//! [`SourceCursor`] walks source text one Unicode scalar value at a time and
//! keeps the line and column of the current position up to date. Columns are
//! tab-expanded to stops every [`TAB_WIDTH`] columns so they match what an
//! editor displays.

mod cursor;

pub use cursor::{next_column, Position, SourceCursor, TAB_WIDTH};
