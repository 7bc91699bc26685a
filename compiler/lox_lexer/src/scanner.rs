//! Hand-written scanner producing [`Token`]s.
//!
//! The scanner walks a [`Cursor`] once, left to right, with at most two
//! bytes of lookahead. Between lexemes it is always in the same state;
//! string, number and identifier scans are entered from the main dispatch
//! and return to it once their lexeme is complete. Only `line` carries
//! over from one lexeme to the next.
//!
//! Malformed input never stops the scan. Errors are pushed onto an
//! internal list and scanning resumes with the next character.

use lox_ir::{keywords, Literal, Span, Token, TokenKind};
use tracing::trace;

use crate::cursor::Cursor;
use crate::lex_error::LexError;

/// Scanner state for one source text.
///
/// Build one per source and drop it when done; there is no way to reset it.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// Byte offset of the first character of the lexeme being scanned.
    start: u32,
    /// Current line, incremented once per consumed `\n`.
    line: u32,
    /// Line on which the current lexeme began.
    start_line: u32,
    errors: Vec<LexError>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            start: cursor.pos(),
            line: 1,
            start_line: 1,
            errors: Vec::new(),
        }
    }

    /// Produce the next token.
    ///
    /// Whitespace, comments and erroneous characters are skipped. Returns
    /// an `Eof` token once the source is exhausted, and keeps returning it
    /// on subsequent calls.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.start = self.cursor.pos();
            self.start_line = self.line;
            if self.cursor.is_eof() {
                return Token::eof(self.line, self.cursor.pos());
            }
            if let Some(token) = self.scan_lexeme() {
                return token;
            }
            debug_assert!(
                self.cursor.pos() > self.start,
                "scanner made no progress at byte {}",
                self.start
            );
        }
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Consume the scanner, returning accumulated errors.
    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    /// Current line number.
    pub fn line(&self) -> u32 {
        self.line
    }

    // ─── Dispatch ───────────────────────────────────────────────────

    /// Scan one lexeme starting at `self.start`.
    ///
    /// Returns `None` for trivia and for characters that produced an error.
    fn scan_lexeme(&mut self) -> Option<Token> {
        let c = self.cursor.current();
        self.cursor.advance();
        match c {
            b'(' => Some(self.single(TokenKind::LeftParen)),
            b')' => Some(self.single(TokenKind::RightParen)),
            b'{' => Some(self.single(TokenKind::LeftBrace)),
            b'}' => Some(self.single(TokenKind::RightBrace)),
            b',' => Some(self.single(TokenKind::Comma)),
            b'.' => Some(self.single(TokenKind::Dot)),
            b'-' => Some(self.single(TokenKind::Minus)),
            b'+' => Some(self.single(TokenKind::Plus)),
            b';' => Some(self.single(TokenKind::Semicolon)),
            b'*' => Some(self.single(TokenKind::Star)),
            b'!' => Some(self.with_equal(TokenKind::Bang, TokenKind::BangEqual)),
            b'=' => Some(self.with_equal(TokenKind::Equal, TokenKind::EqualEqual)),
            b'<' => Some(self.with_equal(TokenKind::Less, TokenKind::LessEqual)),
            b'>' => Some(self.with_equal(TokenKind::Greater, TokenKind::GreaterEqual)),
            b'/' => self.slash_or_comment(),
            b' ' | b'\t' | b'\r' => None,
            b'\n' => {
                self.line += 1;
                None
            }
            b'"' => self.string(),
            b'0'..=b'9' => Some(self.number()),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => Some(self.identifier()),
            _ => {
                self.unexpected(c);
                None
            }
        }
    }

    // ─── Operators ──────────────────────────────────────────────────

    fn single(&self, kind: TokenKind) -> Token {
        self.make_token(kind, Literal::None)
    }

    /// `!`, `=`, `<`, `>`: one-byte kind, or the two-byte kind if `=` follows.
    fn with_equal(&mut self, one: TokenKind, two: TokenKind) -> Token {
        let kind = if self.cursor.eat(b'=') { two } else { one };
        self.make_token(kind, Literal::None)
    }

    fn slash_or_comment(&mut self) -> Option<Token> {
        if self.cursor.eat(b'/') {
            // Line comment: the newline itself is left for the dispatch.
            self.cursor.eat_until_newline_or_eof();
            None
        } else {
            Some(self.single(TokenKind::Slash))
        }
    }

    // ─── Literals ───────────────────────────────────────────────────

    /// String literal; the opening `"` is already consumed.
    ///
    /// Strings may span lines. Content is taken verbatim, with no escape
    /// processing.
    fn string(&mut self) -> Option<Token> {
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => break,
                b'\n' => {
                    self.line += 1;
                    self.cursor.advance();
                }
                _ => {
                    let span = Span::new(self.start, self.cursor.pos());
                    trace!(line = self.line, %span, "unterminated string");
                    self.errors
                        .push(LexError::unterminated_string(self.line, span));
                    return None;
                }
            }
        }

        self.cursor.advance(); // closing '"'
        let value = self.cursor.slice(self.start + 1, self.cursor.pos() - 1);
        Some(self.make_token(TokenKind::String, Literal::String(value.to_owned())))
    }

    /// Number literal; the first digit is already consumed.
    ///
    /// A `.` joins the number only when a digit follows it, so `123.` and
    /// `.5` leave the dot as its own token.
    fn number(&mut self) -> Token {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance(); // '.'
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }

        let text = self.cursor.slice_from(self.start);
        let value = text
            .parse::<f64>()
            .unwrap_or_else(|e| unreachable!("digit run {text:?} failed to parse: {e}"));
        self.make_token(TokenKind::Number, Literal::Number(value))
    }

    // ─── Identifiers ────────────────────────────────────────────────

    /// Identifier or reserved word; the first character is already consumed.
    fn identifier(&mut self) -> Token {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(self.start);
        let kind = keywords::lookup(text).unwrap_or(TokenKind::Identifier);
        self.make_token(kind, Literal::None)
    }

    // ─── Errors ─────────────────────────────────────────────────────

    /// Record an unexpected character and step over the rest of it.
    ///
    /// `lead` is the already-consumed first byte. A multi-byte UTF-8
    /// character produces a single error.
    fn unexpected(&mut self, lead: u8) {
        let width = Cursor::utf8_char_width(lead);
        if width > 1 {
            self.cursor.advance_n(width - 1);
        }
        let text = self.cursor.slice_from(self.start);
        let found = text.chars().next().unwrap_or('\0');
        let span = Span::new(self.start, self.cursor.pos());
        trace!(line = self.line, %span, ?found, "unexpected character");
        self.errors
            .push(LexError::unexpected_character(self.line, span, found));
    }

    // ─── Token construction ─────────────────────────────────────────

    fn make_token(&self, kind: TokenKind, literal: Literal) -> Token {
        debug_assert!(self.start <= self.cursor.pos());
        let span = Span::new(self.start, self.cursor.pos());
        let lexeme = self.cursor.slice(span.start, span.end);
        Token::new(kind, lexeme, literal, self.start_line, span)
    }
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
