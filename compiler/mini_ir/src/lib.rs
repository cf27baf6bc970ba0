//! Mini IR - shared types for the Mini lexer.
//!
//! This crate contains the data the lexer hands to its consumers:
//! - Spans for source locations
//! - `Token` / `TokenKind` for the token stream
//! - `SymbolTable` for deduplicated identifier names
//! - `ConstantTable` for deduplicated literal constants
//!
//! Tokens own their lexeme text so they outlive the lexer that produced
//! them. Table indices are plain `u32` values assigned in insertion order.

mod constant_table;
mod span;
mod symbol_table;
mod token;

pub use constant_table::{ConstKey, ConstKind, ConstValue, ConstantEntry, ConstantTable};
pub use span::{to_u32, Span};
pub use symbol_table::{SymbolEntry, SymbolTable};
pub use token::{Token, TokenKind};
