use super::*;
use mini_ir::Span;
use pretty_assertions::assert_eq;

#[test]
fn identifier_is_registered() {
    let mut cursor = SourceCursor::new("count = 1");
    let mut symbols = SymbolTable::new();
    let token = scan_identifier(&mut cursor, &mut symbols);
    assert_eq!(token.kind, TokenKind::Ident);
    assert_eq!(token.lexeme, "count");
    assert_eq!(token.table_index, Some(0));
    assert_eq!(token.span, Span::new(0, 5));
    assert_eq!(cursor.current(), Some(' '));
    assert_eq!(symbols.lookup("count"), Some(0));
}

#[test]
fn keyword_is_not_registered() {
    let mut cursor = SourceCursor::new("while(");
    let mut symbols = SymbolTable::new();
    let token = scan_identifier(&mut cursor, &mut symbols);
    assert_eq!(token.kind, TokenKind::While);
    assert_eq!(token.table_index, None);
    assert!(symbols.is_empty());
}

#[test]
fn underscores_and_digits_continue_the_run() {
    let mut cursor = SourceCursor::new("_tmp_2x+");
    let mut symbols = SymbolTable::new();
    let token = scan_identifier(&mut cursor, &mut symbols);
    assert_eq!(token.lexeme, "_tmp_2x");
    assert_eq!(cursor.current(), Some('+'));
}

#[test]
fn keyword_prefix_is_an_identifier() {
    let mut cursor = SourceCursor::new("integer");
    let mut symbols = SymbolTable::new();
    let token = scan_identifier(&mut cursor, &mut symbols);
    assert_eq!(token.kind, TokenKind::Ident);
    assert_eq!(token.lexeme, "integer");
}

#[test]
fn unicode_letters_are_identifiers() {
    let mut cursor = SourceCursor::new("größe;");
    let mut symbols = SymbolTable::new();
    let token = scan_identifier(&mut cursor, &mut symbols);
    assert_eq!(token.lexeme, "größe");
    assert_eq!(cursor.column(), 6);
}

#[test]
fn character_classes() {
    assert!(is_ident_start('a'));
    assert!(is_ident_start('_'));
    assert!(!is_ident_start('1'));
    assert!(is_ident_continue('1'));
    assert!(!is_ident_continue('-'));
}
