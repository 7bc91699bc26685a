use super::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert_eq!(buf.as_bytes(), b"");
    assert!(buf.cursor().is_eof());
}

#[test]
fn as_bytes_excludes_padding() {
    let buf = SourceBuffer::new("print 1;");
    assert_eq!(buf.as_bytes(), b"print 1;");
    assert_eq!(buf.as_str(), "print 1;");
    assert_eq!(buf.len(), 8);
}

#[test]
fn padding_is_zeroed() {
    let buf = SourceBuffer::new("x");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.peek(), 0);
}

#[test]
fn multibyte_source_length_is_in_bytes() {
    let buf = SourceBuffer::new("\"日本\"");
    assert_eq!(buf.len(), 8);
}

#[test]
fn text_and_cursor_share_one_buffer() {
    let buf = SourceBuffer::new("na\u{ef}ve");
    assert_eq!(buf.as_str(), "na\u{ef}ve");
    assert_eq!(buf.as_bytes().len(), 6);
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, 6), "na\u{ef}ve");
    assert_eq!(cursor.slice(0, 2).as_ptr(), buf.as_str().as_ptr());
}
