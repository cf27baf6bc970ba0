//! Token types for the Mini lexer output.

use std::fmt;

use crate::Span;

/// A classified lexeme with position metadata.
///
/// Immutable once produced. `table_index` is set only for identifiers and
/// literals, and stays `None` for literals whose registration failed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text for keywords, operators, identifiers and numbers;
    /// the unescaped content for string literals.
    pub lexeme: String,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based, tab-expanded column of the first character.
    pub column: u32,
    /// Index into the symbol table (identifiers) or constant table (literals).
    pub table_index: Option<u32>,
    /// Byte range of the lexeme in the source.
    pub span: Span,
}

impl Token {
    /// Create a token without a table entry.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, column: u32) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
            table_index: None,
            span: Span::DUMMY,
        }
    }

    /// Attach a symbol/constant table index.
    #[must_use]
    pub fn with_index(mut self, index: Option<u32>) -> Self {
        self.table_index = index;
        self
    }

    /// Attach the source span.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Returns `true` for the end-of-input sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}, '{}', Line:{}, Col:{}",
            self.kind.code(),
            self.lexeme.escape_debug(),
            self.line,
            self.column
        )?;
        if let Some(index) = self.table_index {
            write!(f, ", Index:{index}")?;
        }
        write!(f, ">")
    }
}

/// Every token the Mini language knows about.
///
/// A closed set: keywords, operators, punctuation, literal classes and the
/// end-of-input sentinel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    If,
    Else,
    While,
    Int,
    Return,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Assign,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    AmpAmp,
    PipePipe,
    PlusPlus,
    MinusMinus,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,
    Comma,

    // Literals
    Ident,
    IntLit,
    FloatLit,
    StringLit,

    /// End of input. Produced exactly once per lexer.
    Eof,
}

impl TokenKind {
    /// Upper-snake name used in reports (`LESS_EQUAL`, `IDENTIFIER`, ...).
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Int => "INT",
            TokenKind::Return => "RETURN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "MULTIPLY",
            TokenKind::Slash => "DIVIDE",
            TokenKind::Assign => "ASSIGN",
            TokenKind::EqEq => "EQUAL",
            TokenKind::NotEq => "NOT_EQUAL",
            TokenKind::Lt => "LESS",
            TokenKind::LtEq => "LESS_EQUAL",
            TokenKind::Gt => "GREATER",
            TokenKind::GtEq => "GREATER_EQUAL",
            TokenKind::AmpAmp => "AND",
            TokenKind::PipePipe => "OR",
            TokenKind::PlusPlus => "INCREMENT",
            TokenKind::MinusMinus => "DECREMENT",
            TokenKind::LParen => "LEFT_PAREN",
            TokenKind::RParen => "RIGHT_PAREN",
            TokenKind::LBrace => "LEFT_BRACE",
            TokenKind::RBrace => "RIGHT_BRACE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Ident => "IDENTIFIER",
            TokenKind::IntLit => "INTEGER",
            TokenKind::FloatLit => "FLOAT",
            TokenKind::StringLit => "STRING",
            TokenKind::Eof => "EOF",
        }
    }

    /// Stable numeric code used by the token report format.
    ///
    /// Code 25 is unassigned; the binary-operator extensions start at 29.
    pub fn code(self) -> u8 {
        match self {
            TokenKind::If => 1,
            TokenKind::Else => 2,
            TokenKind::While => 3,
            TokenKind::Int => 4,
            TokenKind::Return => 5,
            TokenKind::Plus => 6,
            TokenKind::Minus => 7,
            TokenKind::Star => 8,
            TokenKind::Slash => 9,
            TokenKind::Assign => 10,
            TokenKind::EqEq => 11,
            TokenKind::NotEq => 12,
            TokenKind::Lt => 13,
            TokenKind::LtEq => 14,
            TokenKind::Gt => 15,
            TokenKind::GtEq => 16,
            TokenKind::LParen => 17,
            TokenKind::RParen => 18,
            TokenKind::LBrace => 19,
            TokenKind::RBrace => 20,
            TokenKind::Semicolon => 21,
            TokenKind::Comma => 22,
            TokenKind::Ident => 23,
            TokenKind::IntLit => 24,
            TokenKind::FloatLit => 26,
            TokenKind::StringLit => 27,
            TokenKind::Eof => 28,
            TokenKind::AmpAmp => 29,
            TokenKind::PipePipe => 30,
            TokenKind::PlusPlus => 31,
            TokenKind::MinusMinus => 32,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
