use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// === Basic Navigation ===

#[test]
fn current_returns_first_char() {
    let cursor = SourceCursor::new("abc");
    assert_eq!(cursor.current(), Some('a'));
    assert_eq!(cursor.position(), Position { offset: 0, line: 1, column: 1 });
}

#[test]
fn advance_moves_forward() {
    let mut cursor = SourceCursor::new("abc");
    assert_eq!(cursor.advance(), Some('a'));
    assert_eq!(cursor.current(), Some('b'));
    assert_eq!(cursor.offset(), 1);
    assert_eq!(cursor.column(), 2);
}

#[test]
fn advance_at_eof_is_noop() {
    let mut cursor = SourceCursor::new("x");
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.advance(), None);
    assert_eq!(cursor.column(), 2);
}

#[test]
fn empty_source_is_eof() {
    let cursor = SourceCursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), None);
}

// === Peek ===

#[test]
fn peek_looks_ahead_without_consuming() {
    let cursor = SourceCursor::new("abc");
    assert_eq!(cursor.peek(0), Some('a'));
    assert_eq!(cursor.peek(1), Some('b'));
    assert_eq!(cursor.peek(2), Some('c'));
    assert_eq!(cursor.peek(3), None);
    assert_eq!(cursor.offset(), 0);
}

#[test]
fn peek_handles_multibyte() {
    let cursor = SourceCursor::new("é1");
    assert_eq!(cursor.peek(1), Some('1'));
}

// === Lines and Columns ===

#[test]
fn newline_resets_column() {
    let mut cursor = SourceCursor::new("ab\ncd");
    cursor.advance();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.line(), 2);
    assert_eq!(cursor.column(), 1);
    assert_eq!(cursor.current(), Some('c'));
}

#[test]
fn tab_at_column_one_reaches_five() {
    let mut cursor = SourceCursor::new("\tx");
    cursor.advance();
    assert_eq!(cursor.column(), 5);
}

#[test]
fn tab_at_column_three_reaches_five() {
    let mut cursor = SourceCursor::new("ab\tx");
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.column(), 3);
    cursor.advance();
    assert_eq!(cursor.column(), 5);
}

#[test]
fn tab_at_column_five_reaches_nine() {
    let mut cursor = SourceCursor::new("abcd\tx");
    for _ in 0..4 {
        cursor.advance();
    }
    assert_eq!(cursor.column(), 5);
    cursor.advance();
    assert_eq!(cursor.column(), 9);
}

#[test]
fn multibyte_counts_one_column() {
    let mut cursor = SourceCursor::new("日本");
    cursor.advance();
    assert_eq!(cursor.column(), 2);
    assert_eq!(cursor.offset(), 3);
}

#[test]
fn carriage_return_is_an_ordinary_column() {
    let mut cursor = SourceCursor::new("\r\nx");
    cursor.advance();
    assert_eq!((cursor.line(), cursor.column()), (1, 2));
    cursor.advance();
    assert_eq!((cursor.line(), cursor.column()), (2, 1));
}

// === eat / eat_while ===

#[test]
fn eat_consumes_only_on_match() {
    let mut cursor = SourceCursor::new("=>");
    assert!(!cursor.eat('>'));
    assert!(cursor.eat('='));
    assert!(cursor.eat('>'));
    assert!(cursor.is_eof());
}

#[test]
fn eat_while_stops_at_mismatch() {
    let mut cursor = SourceCursor::new("123abc");
    cursor.eat_while(|c| c.is_ascii_digit());
    assert_eq!(cursor.offset(), 3);
    assert_eq!(cursor.slice_from(0), "123");
}

#[test]
fn eat_while_stops_at_eof() {
    let mut cursor = SourceCursor::new("aaa");
    cursor.eat_while(|c| c == 'a');
    assert!(cursor.is_eof());
}

// === eat_through_newline ===

#[test]
fn eat_through_newline_consumes_newline() {
    let mut cursor = SourceCursor::new("// comment\nnext");
    cursor.eat_through_newline();
    assert_eq!(cursor.current(), Some('n'));
    assert_eq!((cursor.line(), cursor.column()), (2, 1));
}

#[test]
fn eat_through_newline_without_newline_reaches_eof() {
    let mut cursor = SourceCursor::new("//\tab");
    cursor.eat_through_newline();
    assert!(cursor.is_eof());
    assert_eq!(cursor.line(), 1);
    // "//" -> 3, tab -> 5, "ab" -> 7
    assert_eq!(cursor.column(), 7);
}

// === Slice ===

#[test]
fn slice_extracts_substring() {
    let cursor = SourceCursor::new("hello world");
    assert_eq!(cursor.slice(0, 5), "hello");
    assert_eq!(cursor.slice(6, 11), "world");
    assert_eq!(cursor.slice(2, 2), "");
}

#[test]
fn next_column_helper() {
    assert_eq!(next_column(1, '\t'), 5);
    assert_eq!(next_column(4, '\t'), 5);
    assert_eq!(next_column(5, '\t'), 9);
    assert_eq!(next_column(7, 'x'), 8);
}

// === Properties ===

proptest! {
    #[test]
    fn line_count_matches_newlines(src in "[a-z \t\n]{0,64}") {
        let mut cursor = SourceCursor::new(&src);
        while cursor.advance().is_some() {}
        let newlines = u32::try_from(src.matches('\n').count()).unwrap_or(u32::MAX);
        prop_assert_eq!(cursor.line(), newlines + 1);
        prop_assert!(cursor.is_eof());
    }

    #[test]
    fn tab_always_lands_on_a_stop(src in "[a-z\t]{0,32}") {
        let mut cursor = SourceCursor::new(&src);
        while let Some(ch) = cursor.advance() {
            prop_assert!(cursor.column() >= 2);
            if ch == '\t' {
                prop_assert_eq!((cursor.column() - 1) % TAB_WIDTH, 0);
            }
        }
    }

    #[test]
    fn eat_through_newline_matches_stepwise(src in "[a-z\t ]{0,16}(\n[a-z]{0,4})?") {
        let mut fast = SourceCursor::new(&src);
        fast.eat_through_newline();
        let mut slow = SourceCursor::new(&src);
        while let Some(ch) = slow.advance() {
            if ch == '\n' {
                break;
            }
        }
        prop_assert_eq!(fast.position(), slow.position());
    }
}
