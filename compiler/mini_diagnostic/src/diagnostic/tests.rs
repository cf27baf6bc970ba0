use super::*;

#[test]
fn constructor_keeps_position() {
    let diag = Diagnostic::new(ErrorCode::E0002, "unterminated string", 3, 9);
    assert_eq!(diag.code, ErrorCode::E0002);
    assert_eq!(diag.line, 3);
    assert_eq!(diag.column, 9);
    assert_eq!(diag.message, "unterminated string");
}

#[test]
fn display_includes_position_and_code() {
    let diag = Diagnostic::new(ErrorCode::E0005, "illegal character '@'", 1, 4);
    assert_eq!(
        diag.to_string(),
        "error[E0005] (line 1, column 4): illegal character '@'"
    );
}
