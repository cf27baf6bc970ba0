//! Core diagnostic type.

use std::fmt;

use crate::ErrorCode;

/// A recorded lexical error with its source position.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    /// 1-based line.
    pub line: u32,
    /// 1-based, tab-expanded column.
    pub column: u32,
}

impl Diagnostic {
    pub fn new(code: ErrorCode, message: impl Into<String>, line: u32, column: u32) -> Self {
        Diagnostic {
            code,
            message: message.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error[{}] (line {}, column {}): {}",
            self.code, self.line, self.column, self.message
        )
    }
}

#[cfg(test)]
mod tests;
