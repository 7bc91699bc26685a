use lox_ir::Span;
use lox_lexer::LexError;
use pretty_assertions::assert_eq;

use super::{format_lex_error, report_lex_errors};

#[test]
fn unexpected_character_format() {
    let err = LexError::unexpected_character(3, Span::new(10, 11), '@');
    assert_eq!(format_lex_error(&err), "[line 3] Error: Unexpected character.");
}

#[test]
fn unterminated_string_format() {
    let err = LexError::unterminated_string(1, Span::new(0, 5));
    assert_eq!(format_lex_error(&err), "[line 1] Error: Unterminated string.");
}

#[test]
fn report_writes_one_line_per_error() {
    let errors = vec![
        LexError::unexpected_character(1, Span::new(0, 1), '#'),
        LexError::unterminated_string(2, Span::new(3, 7)),
    ];
    let mut out = Vec::new();
    report_lex_errors(&mut out, &errors).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "[line 1] Error: Unexpected character.\n[line 2] Error: Unterminated string.\n"
    );
}

#[test]
fn report_nothing_for_no_errors() {
    let mut out = Vec::new();
    report_lex_errors(&mut out, &[]).unwrap();
    assert!(out.is_empty());
}
