use super::*;

#[test]
fn reserved_keywords() {
    assert_eq!(lookup("if"), Some(TokenKind::If));
    assert_eq!(lookup("else"), Some(TokenKind::Else));
    assert_eq!(lookup("while"), Some(TokenKind::While));
    assert_eq!(lookup("int"), Some(TokenKind::Int));
    assert_eq!(lookup("return"), Some(TokenKind::Return));
}

#[test]
fn near_misses_are_identifiers() {
    assert_eq!(lookup("If"), None);
    assert_eq!(lookup("iff"), None);
    assert_eq!(lookup("integer"), None);
    assert_eq!(lookup("returns"), None);
    assert_eq!(lookup("_if"), None);
    assert_eq!(lookup(""), None);
}
