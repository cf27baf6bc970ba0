use super::*;
use std::collections::HashSet;

const ALL_KINDS: [TokenKind; 31] = [
    TokenKind::If,
    TokenKind::Else,
    TokenKind::While,
    TokenKind::Int,
    TokenKind::Return,
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Star,
    TokenKind::Slash,
    TokenKind::Assign,
    TokenKind::EqEq,
    TokenKind::NotEq,
    TokenKind::Lt,
    TokenKind::LtEq,
    TokenKind::Gt,
    TokenKind::GtEq,
    TokenKind::AmpAmp,
    TokenKind::PipePipe,
    TokenKind::PlusPlus,
    TokenKind::MinusMinus,
    TokenKind::LParen,
    TokenKind::RParen,
    TokenKind::LBrace,
    TokenKind::RBrace,
    TokenKind::Semicolon,
    TokenKind::Comma,
    TokenKind::Ident,
    TokenKind::IntLit,
    TokenKind::FloatLit,
    TokenKind::StringLit,
    TokenKind::Eof,
];

#[test]
fn codes_are_unique() {
    let codes: HashSet<u8> = ALL_KINDS.iter().map(|k| k.code()).collect();
    assert_eq!(codes.len(), ALL_KINDS.len());
    assert!(!codes.contains(&25));
}

#[test]
fn names_are_unique() {
    let names: HashSet<&str> = ALL_KINDS.iter().map(|k| k.name()).collect();
    assert_eq!(names.len(), ALL_KINDS.len());
}

#[test]
fn display_with_and_without_index() {
    let ident = Token::new(TokenKind::Ident, "x", 1, 5).with_index(Some(0));
    assert_eq!(ident.to_string(), "<23, 'x', Line:1, Col:5, Index:0>");

    let semi = Token::new(TokenKind::Semicolon, ";", 2, 1);
    assert_eq!(semi.to_string(), "<21, ';', Line:2, Col:1>");
}

#[test]
fn display_escapes_control_characters() {
    let s = Token::new(TokenKind::StringLit, "a\nb", 1, 1).with_index(Some(3));
    assert_eq!(s.to_string(), "<27, 'a\\nb', Line:1, Col:1, Index:3>");
}

#[test]
fn eof_detection() {
    assert!(Token::new(TokenKind::Eof, "EOF", 1, 1).is_eof());
    assert!(!Token::new(TokenKind::Comma, ",", 1, 1).is_eof());
}
