//! Token types for the Lox scanner.
//!
//! A [`Token`] is an immutable record of one classified lexeme: its
//! [`TokenKind`], the lexeme exactly as written, the decoded [`Literal`],
//! the 1-based line it started on, and its byte [`Span`].

mod kind;
mod list;

pub use kind::TokenKind;
pub use list::TokenList;

use std::fmt;

use super::Span;

/// Decoded literal value of a token.
///
/// `String` tokens carry `Literal::String`, `Number` tokens carry
/// `Literal::Number`, everything else carries `Literal::None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Literal {
    #[default]
    None,
    /// String content between the quotes, verbatim (no escape processing).
    String(String),
    Number(f64),
}

impl Literal {
    /// The string payload, if this is a string literal.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric payload, if this is a number literal.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::None => Ok(()),
            Literal::String(s) => f.write_str(s),
            // Integral values keep their `.0` so `1` and `1.5` render alike.
            Literal::Number(n) if n.is_finite() && n.fract() == 0.0 => write!(f, "{n:.1}"),
            Literal::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A scanned token.
///
/// Tokens own their text: nothing here borrows from the source or from
/// another token.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text of the lexeme, exactly as written.
    pub lexeme: String,
    pub literal: Literal,
    /// 1-based line on which the lexeme begins.
    pub line: u32,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Literal,
        line: u32,
        span: Span,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
            span,
        }
    }

    /// The end-of-file marker: empty lexeme, zero-length span at `pos`.
    pub fn eof(line: u32, pos: u32) -> Self {
        Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            literal: Literal::None,
            line,
            span: Span::point(pos),
        }
    }
}

/// `<KIND> <lexeme> <literal>`, the literal part empty when absent.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.lexeme, self.literal)
    }
}
