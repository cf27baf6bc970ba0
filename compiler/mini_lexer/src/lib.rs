//! Lexer for the Mini language.
//!
//! Turns source text into a pull-based stream of [`Token`]s while building a
//! [`SymbolTable`] of identifiers and a [`ConstantTable`] of literals.
//! Malformed input never stops the scan: each problem is recorded as a
//! diagnostic, the offending text is skipped or closed early, and lexing
//! carries on.
//!
//! # Architecture
//!
//! ```text
//! source → SourceCursor → Lexer::next_token → Token
//!                              │
//!                              ├─ comments  (skip, no token)
//!                              ├─ ident     → SymbolTable
//!                              ├─ number    → ConstantTable
//!                              ├─ string    → ConstantTable
//!                              └─ operator  (maximal munch)
//! ```
//!
//! Sub-scanners push [`LexError`]s into a scratch buffer; the lexer moves
//! them into its [`Diagnostics`] after each step so discovery order holds.

mod comments;
mod ident;
mod keywords;
mod lex_error;
mod lexer;
mod number;
mod operator;
mod string;

pub use lex_error::{LexError, LexErrorKind};
pub use lexer::Lexer;
pub use mini_diagnostic::{Diagnostic, DiagnosticConfig, Diagnostics, LimitPolicy};
pub use mini_ir::{
    ConstKind, ConstValue, ConstantEntry, ConstantTable, Span, SymbolEntry, SymbolTable, Token,
    TokenKind,
};

use mini_lexer_core::Position;

/// Everything one lexing pass produces.
#[derive(Clone, Debug, PartialEq)]
pub struct LexOutput {
    /// Tokens in source order, ending with exactly one EOF.
    pub tokens: Vec<Token>,
    pub symbols: SymbolTable,
    pub constants: ConstantTable,
    pub diagnostics: Vec<Diagnostic>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Drains the lexer: every remaining token, then both tables and the
/// diagnostics.
impl From<Lexer<'_>> for LexOutput {
    fn from(mut lexer: Lexer<'_>) -> Self {
        let tokens = lexer.tokens();
        let (symbols, constants, diagnostics) = lexer.into_parts();
        LexOutput {
            tokens,
            symbols,
            constants,
            diagnostics: diagnostics.into_entries(),
        }
    }
}

/// Lex `source` to completion with the default configuration.
pub fn lex(source: &str) -> LexOutput {
    Lexer::new(source).into()
}

/// Lex `source` to completion, recording into `diagnostics`.
pub fn lex_with(source: &str, diagnostics: Diagnostics) -> LexOutput {
    Lexer::with_diagnostics(source, diagnostics).into()
}

/// Build a token positioned at `start` and spanning `start.offset..end`.
pub(crate) fn token_at(
    kind: TokenKind,
    lexeme: impl Into<String>,
    start: Position,
    end: u32,
) -> Token {
    Token::new(kind, lexeme, start.line, start.column).with_span(Span::new(start.offset, end))
}
