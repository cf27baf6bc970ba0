//! Error codes for lexer diagnostics.

use std::fmt;

/// Error codes for every diagnostic the lexer can produce.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Block comment without closing `*/`
    E0001,
    /// Unterminated string literal
    E0002,
    /// Exponent marker without digits
    E0003,
    /// Numeric literal that cannot be converted
    E0004,
    /// Character that starts no token
    E0005,
    /// Lone `!`, `&` or `|`
    E0006,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
