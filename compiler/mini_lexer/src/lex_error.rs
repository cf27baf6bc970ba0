//! Lexer error types.
//!
//! Sub-scanners push [`LexError`] values into an accumulator instead of
//! returning `Err`: every error is recoverable and scanning always goes on.
//! The lexer converts them to [`Diagnostic`]s in discovery order.

use mini_diagnostic::{Diagnostic, ErrorCode};
use mini_lexer_core::Position;

/// A lexer error positioned at the start of the offending construct.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: u32,
    pub column: u32,
}

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// `/*` with no matching `*/` before end of input.
    UnclosedBlockComment,
    /// Newline or end of input before the closing quote.
    UnterminatedString,
    /// `e`/`E` (and optional sign) not followed by a digit.
    MalformedExponent,
    /// Literal text that does not convert to a value (e.g. `i64` overflow).
    InvalidNumber { text: String },
    /// A character that starts no token.
    IllegalCharacter { ch: char },
    /// `!`, `&` or `|` without the second half of its operator.
    UnpairedOperator { ch: char, expected: &'static str },
}

impl LexError {
    fn at(kind: LexErrorKind, pos: Position) -> Self {
        LexError {
            kind,
            line: pos.line,
            column: pos.column,
        }
    }

    pub fn unclosed_block_comment(pos: Position) -> Self {
        Self::at(LexErrorKind::UnclosedBlockComment, pos)
    }

    pub fn unterminated_string(pos: Position) -> Self {
        Self::at(LexErrorKind::UnterminatedString, pos)
    }

    pub fn malformed_exponent(pos: Position) -> Self {
        Self::at(LexErrorKind::MalformedExponent, pos)
    }

    pub fn invalid_number(pos: Position, text: &str) -> Self {
        Self::at(
            LexErrorKind::InvalidNumber {
                text: text.to_owned(),
            },
            pos,
        )
    }

    pub fn illegal_character(pos: Position, ch: char) -> Self {
        Self::at(LexErrorKind::IllegalCharacter { ch }, pos)
    }

    pub fn unpaired_operator(pos: Position, ch: char, expected: &'static str) -> Self {
        Self::at(LexErrorKind::UnpairedOperator { ch, expected }, pos)
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnclosedBlockComment => ErrorCode::E0001,
            LexErrorKind::UnterminatedString => ErrorCode::E0002,
            LexErrorKind::MalformedExponent => ErrorCode::E0003,
            LexErrorKind::InvalidNumber { .. } => ErrorCode::E0004,
            LexErrorKind::IllegalCharacter { .. } => ErrorCode::E0005,
            LexErrorKind::UnpairedOperator { .. } => ErrorCode::E0006,
        }
    }

    pub fn message(&self) -> String {
        match &self.kind {
            LexErrorKind::UnclosedBlockComment => "unclosed block comment".to_owned(),
            LexErrorKind::UnterminatedString => "unterminated string".to_owned(),
            LexErrorKind::MalformedExponent => "malformed exponent".to_owned(),
            LexErrorKind::InvalidNumber { text } => format!("invalid numeric literal '{text}'"),
            LexErrorKind::IllegalCharacter { ch } => {
                format!("illegal character '{}'", ch.escape_debug())
            }
            LexErrorKind::UnpairedOperator { ch, expected } => {
                format!("illegal character '{ch}', expected '{expected}'")
            }
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::new(self.code(), self.message(), self.line, self.column)
    }
}
