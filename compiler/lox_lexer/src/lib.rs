//! Scanner for Lox.
//!
//! Turns source text into a [`TokenList`] terminated by an EOF token,
//! plus every [`LexError`] found along the way.
//!
//! # Architecture
//!
//! ```text
//! &str → SourceBuffer → Cursor → Scanner → (TokenList, Vec<LexError>)
//! ```
//!
//! - [`SourceBuffer`] owns a zero-padded copy of the source so lookahead
//!   never needs a bounds check.
//! - [`Cursor`] is a `Copy` byte position over that buffer.
//! - [`Scanner`] holds the per-source scan state and classifies lexemes.
//!
//! Each call to [`lex`] builds a fresh scanner; nothing is shared between
//! calls, so separate sources can be scanned on separate threads.

mod cursor;
mod lex_error;
mod scanner;
mod source_buffer;

pub use cursor::Cursor;
pub use lex_error::{LexError, LexErrorKind};
pub use scanner::Scanner;
pub use source_buffer::SourceBuffer;

use lox_ir::{TokenKind, TokenList};

/// Result of scanning one source text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LexOutput {
    /// Tokens in source order, always ending with exactly one `Eof` token.
    pub tokens: TokenList,
    /// Lexical errors in the order they were found.
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan `source` into tokens and lexical errors.
///
/// Never fails: malformed input is reported through
/// [`LexOutput::errors`] and the scan continues after it.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str) -> LexOutput {
    let buf = SourceBuffer::new(source);
    let mut scanner = Scanner::new(buf.cursor());
    let mut tokens = TokenList::with_capacity(source.len() / 2 + 1);

    loop {
        let token = scanner.next_token();
        let is_eof = token.kind == TokenKind::Eof;
        tokens.push(token);
        if is_eof {
            break;
        }
    }

    let errors = scanner.into_errors();
    tracing::debug!(tokens = tokens.len(), errors = errors.len(), "lexed source");
    LexOutput { tokens, errors }
}
