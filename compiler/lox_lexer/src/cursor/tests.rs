use crate::SourceBuffer;
use pretty_assertions::assert_eq;

use super::Cursor;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_n_moves_multiple() {
    let buf = SourceBuffer::new("abcdef");
    let mut cursor = buf.cursor();
    cursor.advance_n(3);
    assert_eq!(cursor.current(), b'd');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn advance_through_entire_source() {
    let buf = SourceBuffer::new("hi");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current(), b'h');
    cursor.advance();
    assert_eq!(cursor.current(), b'i');
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

// === Peek ===

#[test]
fn peek_returns_next_byte() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.peek(), b'b');
}

#[test]
fn peek_near_end_returns_sentinel() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    cursor.advance(); // at 'b'
    assert_eq!(cursor.peek(), 0);
}

#[test]
fn peek_at_eof_stays_in_bounds() {
    let buf = SourceBuffer::new("a");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.peek(), 0);
}

// === EOF Detection ===

#[test]
fn empty_source_is_eof() {
    let buf = SourceBuffer::new("");
    let cursor = buf.cursor();
    assert!(cursor.is_eof());
    assert_eq!(cursor.source_len(), 0);
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

// === Eat ===

#[test]
fn eat_consumes_matching_byte() {
    let buf = SourceBuffer::new("==");
    let mut cursor = buf.cursor();
    assert!(cursor.eat(b'='));
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn eat_leaves_other_byte() {
    let buf = SourceBuffer::new("=>");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert!(!cursor.eat(b'='));
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn eat_never_consumes_sentinel() {
    let buf = SourceBuffer::new("");
    let mut cursor = buf.cursor();
    assert!(!cursor.eat(0));
    assert_eq!(cursor.pos(), 0);
}

// === Slicing ===

#[test]
fn slice_extracts_substring() {
    let buf = SourceBuffer::new("hello world");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, 5), "hello");
    assert_eq!(cursor.slice(6, 11), "world");
}

#[test]
fn slice_from_extracts_to_current() {
    let buf = SourceBuffer::new("hello world");
    let mut cursor = buf.cursor();
    cursor.advance_n(5);
    assert_eq!(cursor.slice_from(0), "hello");
}

#[test]
fn slice_empty_range() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(1, 1), "");
}

// === eat_while ===

#[test]
fn eat_while_digits() {
    let buf = SourceBuffer::new("123abc");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_digit());
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn eat_while_stops_at_sentinel() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_alphabetic());
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.is_eof());
}

// === UTF-8 ===

#[test]
fn utf8_char_width_by_leading_byte() {
    assert_eq!(Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(Cursor::utf8_char_width(0xC3), 2);
    assert_eq!(Cursor::utf8_char_width(0xE2), 3);
    assert_eq!(Cursor::utf8_char_width(0xF0), 4);
}

// === Comment and string skipping ===

#[test]
fn eat_until_newline_stops_before_newline() {
    let buf = SourceBuffer::new("// note\nx");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 7);
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn eat_until_newline_hits_eof() {
    let buf = SourceBuffer::new("// trailing");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_string_delim_finds_quote() {
    let buf = SourceBuffer::new("abc\" rest");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(), b'"');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn skip_to_string_delim_finds_newline_first() {
    let buf = SourceBuffer::new("ab\ncd\"");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(), b'\n');
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn skip_to_string_delim_reports_eof() {
    let buf = SourceBuffer::new("no closing quote");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(), 0);
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_string_delim_passes_interior_null() {
    let buf = SourceBuffer::new("a\0b\"");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(), b'"');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn cursor_is_copy() {
    let buf = SourceBuffer::new("abc");
    let mut a = buf.cursor();
    let b = a;
    a.advance();
    assert_eq!(a.pos(), 1);
    assert_eq!(b.pos(), 0);
}
