//! Lexical error types.
//!
//! Errors are recorded, not raised: the scanner pushes a [`LexError`] and
//! resumes at the next character, so one pass reports every lexical error
//! in the source. How errors are shown is up to the caller.

use lox_ir::Span;
use thiserror::Error;

/// A lexical error.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
#[error("{kind}")]
pub struct LexError {
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// Line on which the error was detected (1-based).
    pub line: u32,
    /// WHERE in the source, as a byte range.
    pub span: Span,
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// End of source reached before the closing `"` of a string literal.
    #[error("Unterminated string.")]
    UnterminatedString,
    /// A character that cannot start any lexeme.
    #[error("Unexpected character.")]
    UnexpectedCharacter { found: char },
}

impl LexError {
    /// String literal without a closing quote.
    ///
    /// `span` runs from the opening quote to the end of the source; `line`
    /// is where the scanner ran out of input.
    pub fn unterminated_string(line: u32, span: Span) -> Self {
        Self {
            kind: LexErrorKind::UnterminatedString,
            line,
            span,
        }
    }

    /// Character matching no lexeme-starting rule.
    pub fn unexpected_character(line: u32, span: Span, found: char) -> Self {
        Self {
            kind: LexErrorKind::UnexpectedCharacter { found },
            line,
            span,
        }
    }

    /// The user-facing message, e.g. `"Unterminated string."`.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
