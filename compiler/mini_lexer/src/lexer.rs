//! The token dispatcher.
//!
//! [`Lexer::next_token`] is the control loop: skip whitespace and comments,
//! look at the current character, hand off to the matching sub-scanner.
//! Each call yields exactly one token; the EOF sentinel comes once, when
//! the source is exhausted.

use mini_diagnostic::{DiagnosticConfig, Diagnostics};
use mini_ir::{ConstantTable, Span, SymbolTable, Token, TokenKind};
use mini_lexer_core::SourceCursor;

use crate::comments::{at_block_comment, at_line_comment, skip_block_comment, skip_line_comment};
use crate::ident::{is_ident_start, scan_identifier};
use crate::lex_error::LexError;
use crate::number::scan_number;
use crate::operator::{is_operator_lead, scan_operator};
use crate::string::scan_string;
use crate::token_at;

/// Single-character punctuation and the operators without a two-character
/// form.
fn punctuation(c: char) -> Option<TokenKind> {
    match c {
        '(' => Some(TokenKind::LParen),
        ')' => Some(TokenKind::RParen),
        '{' => Some(TokenKind::LBrace),
        '}' => Some(TokenKind::RBrace),
        ';' => Some(TokenKind::Semicolon),
        ',' => Some(TokenKind::Comma),
        '*' => Some(TokenKind::Star),
        '/' => Some(TokenKind::Slash),
        _ => None,
    }
}

/// One scanning pass over one source text.
///
/// Owns its cursor, both tables and the diagnostics for the whole pass.
/// Forward-only: to rescan, create a new lexer.
#[derive(Debug)]
pub struct Lexer<'src> {
    cursor: SourceCursor<'src>,
    symbols: SymbolTable,
    constants: ConstantTable,
    diagnostics: Diagnostics,
    /// Scratch buffer the sub-scanners push into; drained after each step.
    errors: Vec<LexError>,
    /// Set once the EOF token has been produced.
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Create a lexer with the default diagnostic configuration.
    pub fn new(source: &'src str) -> Self {
        Self::with_diagnostics(source, Diagnostics::new())
    }

    pub fn with_config(source: &'src str, config: DiagnosticConfig) -> Self {
        Self::with_diagnostics(source, Diagnostics::with_config(config))
    }

    /// Create a lexer recording into a caller-built collector (custom sink).
    pub fn with_diagnostics(source: &'src str, diagnostics: Diagnostics) -> Self {
        Lexer {
            cursor: SourceCursor::new(source),
            symbols: SymbolTable::new(),
            constants: ConstantTable::new(),
            diagnostics,
            errors: Vec::new(),
            finished: false,
        }
    }

    /// Produce the next token.
    ///
    /// Returns the EOF sentinel once the source is exhausted (or once the
    /// error limit is hit under `LimitPolicy::Halt`). Calling again after
    /// that keeps returning EOF; consumers should stop at the first one.
    pub fn next_token(&mut self) -> Token {
        loop {
            if self.diagnostics.should_halt() {
                break;
            }
            let Some(c) = self.cursor.current() else {
                break;
            };

            match c {
                ' ' | '\t' | '\n' | '\r' => {
                    self.cursor.eat_while(|c| matches!(c, ' ' | '\t' | '\n' | '\r'));
                }
                '/' if at_block_comment(&self.cursor) => {
                    skip_block_comment(&mut self.cursor, &mut self.errors);
                    self.flush_errors();
                }
                '/' if at_line_comment(&self.cursor) => skip_line_comment(&mut self.cursor),
                c if is_ident_start(c) => {
                    let token = scan_identifier(&mut self.cursor, &mut self.symbols);
                    return self.emit(token);
                }
                c if c.is_ascii_digit() => {
                    let token =
                        scan_number(&mut self.cursor, &mut self.constants, &mut self.errors);
                    return self.emit(token);
                }
                '"' | '\'' => {
                    let token =
                        scan_string(&mut self.cursor, &mut self.constants, &mut self.errors);
                    return self.emit(token);
                }
                c if is_operator_lead(c) => {
                    if let Some(token) = scan_operator(&mut self.cursor, &mut self.errors) {
                        return self.emit(token);
                    }
                    self.flush_errors();
                }
                c => {
                    let start = self.cursor.position();
                    self.cursor.advance();
                    let end = self.cursor.offset();
                    if let Some(kind) = punctuation(c) {
                        let lexeme = self.cursor.slice(start.offset, end);
                        return self.emit(token_at(kind, lexeme, start, end));
                    }
                    self.errors.push(LexError::illegal_character(start, c));
                    self.flush_errors();
                }
            }
        }
        self.eof()
    }

    /// Drain the remaining tokens, EOF included.
    ///
    /// Returns an empty vector if EOF was already produced.
    pub fn tokens(&mut self) -> Vec<Token> {
        self.by_ref().collect()
    }

    /// `true` once the EOF token has been produced.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn constants(&self) -> &ConstantTable {
        &self.constants
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Consume the lexer, keeping the tables and diagnostics.
    pub fn into_parts(self) -> (SymbolTable, ConstantTable, Diagnostics) {
        (self.symbols, self.constants, self.diagnostics)
    }

    /// Move scanner errors into the diagnostics, in order.
    fn flush_errors(&mut self) {
        for error in self.errors.drain(..) {
            self.diagnostics.record(error.into_diagnostic());
        }
    }

    fn emit(&mut self, token: Token) -> Token {
        self.flush_errors();
        tracing::trace!(
            kind = %token.kind,
            line = token.line,
            column = token.column,
            lexeme = %token.lexeme,
            "token"
        );
        token
    }

    fn eof(&mut self) -> Token {
        if !self.finished {
            self.finished = true;
            tracing::debug!(
                symbols = self.symbols.len(),
                constants = self.constants.len(),
                errors = self.diagnostics.len(),
                halted = self.diagnostics.should_halt(),
                "lexing complete"
            );
        }
        let pos = self.cursor.position();
        Token::new(TokenKind::Eof, "EOF", pos.line, pos.column).with_span(Span::point(pos.offset))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens through EOF, then `None`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        Some(self.next_token())
    }
}
