use mini_lexer::lex;
use pretty_assertions::assert_eq;

use super::{render, summary};

fn rule() -> String {
    "=".repeat(60)
}

#[test]
fn declaration_report() {
    let output = lex("int x = 5;");
    let r = rule();
    let expected = format!(
        "{r}\nTOKENS\n{r}\n\
         \x20  1. <4, 'int', Line:1, Col:1>\n\
         \x20  2. <23, 'x', Line:1, Col:5, Index:0>\n\
         \x20  3. <10, '=', Line:1, Col:7>\n\
         \x20  4. <24, '5', Line:1, Col:9, Index:0>\n\
         \x20  5. <21, ';', Line:1, Col:10>\n\
         \x20  6. <28, 'EOF', Line:1, Col:11>\n\
         \n{r}\nSYMBOL TABLE (identifiers)\n{r}\n  [0] x\n\
         \n{r}\nCONSTANT TABLE (literals)\n{r}\n  [0] 5 (int)\n"
    );
    assert_eq!(render(&output), expected);
}

#[test]
fn empty_tables_are_marked() {
    let report = render(&lex(""));
    assert_eq!(report.matches("  (empty)").count(), 2);
    assert!(report.contains("   1. <28, 'EOF', Line:1, Col:1>"));
}

#[test]
fn errors_section_only_when_present() {
    assert!(!render(&lex("x;")).contains("ERRORS"));

    let report = render(&lex("x @ y"));
    assert!(report.contains("ERRORS (1)"));
    assert!(report.contains("  error[E0005] (line 1, column 3): illegal character '@'"));
}

#[test]
fn string_constants_are_quoted() {
    let report = render(&lex(r#"s = "hi";"#));
    assert!(report.contains("  [0] \"hi\" (string)"));
}

#[test]
fn summary_counts_errors() {
    assert_eq!(summary(&lex("int a;")), "Lexing completed with no errors");
    assert_eq!(summary(&lex("@ $")), "Lexing finished with 2 error(s)");
}
