//! Diagnostic rendering for lexical errors.

use std::io::{self, Write};

use lox_lexer::LexError;

/// Render one error as `[line N] Error: <message>`.
pub fn format_lex_error(error: &LexError) -> String {
    format!("[line {}] Error: {}", error.line, error.message())
}

/// Write every error, one per line, in source order.
pub fn report_lex_errors<W: Write>(out: &mut W, errors: &[LexError]) -> io::Result<()> {
    for error in errors {
        writeln!(out, "{}", format_lex_error(error))?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
