//! Script and prompt runners.
//!
//! Each unit of source (a whole file, or one prompt line) is scanned
//! independently: errors are reported, then every token is printed on its
//! own line using the token's display form.

use std::io::{BufRead, Write};
use std::path::Path;

use lox_lexer::lex;

use crate::report::report_lex_errors;
use crate::{DriverError, EXIT_DATA_ERR};

/// Result of scanning one unit of source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Clean,
    LexErrors,
}

impl RunOutcome {
    /// Process exit status for a script run ending with this outcome.
    pub fn exit_code(self) -> i32 {
        match self {
            RunOutcome::Clean => 0,
            RunOutcome::LexErrors => EXIT_DATA_ERR,
        }
    }
}

/// Scan `source`, writing tokens to `out` and diagnostics to `err`.
pub fn run_source<W: Write, E: Write>(
    source: &str,
    out: &mut W,
    err: &mut E,
) -> Result<RunOutcome, DriverError> {
    let output = lex(source);
    report_lex_errors(err, &output.errors)?;
    for token in &output.tokens {
        writeln!(out, "{token}")?;
    }
    Ok(if output.has_errors() {
        RunOutcome::LexErrors
    } else {
        RunOutcome::Clean
    })
}

/// Read a script into memory.
pub fn read_source(path: &Path) -> Result<String, DriverError> {
    std::fs::read_to_string(path).map_err(|e| DriverError::from_read(path, e))
}

/// Scan the script at `path`.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn run_file<W: Write, E: Write>(
    path: &Path,
    out: &mut W,
    err: &mut E,
) -> Result<RunOutcome, DriverError> {
    let source = read_source(path)?;
    let outcome = run_source(&source, out, err)?;
    tracing::debug!(?outcome, "script scanned");
    Ok(outcome)
}

/// Interactive loop: prompt with `> `, scan each line, repeat until end of
/// input. Errors on one line never carry over to the next.
///
/// Lines are decoded lossily, so invalid UTF-8 becomes `U+FFFD` and is
/// reported as an unexpected character instead of ending the session.
pub fn run_prompt<R: BufRead, W: Write, E: Write>(
    mut input: R,
    out: &mut W,
    err: &mut E,
) -> Result<(), DriverError> {
    let mut line = Vec::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        let bytes = line
            .strip_suffix(b"\n")
            .map_or(line.as_slice(), |l| l.strip_suffix(b"\r").unwrap_or(l));
        let source = String::from_utf8_lossy(bytes);
        let outcome = run_source(&source, out, err)?;
        tracing::trace!(?outcome, "prompt line scanned");
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
