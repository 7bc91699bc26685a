//! Lox driver.
//!
//! Feeds source text to the scanner and owns everything the scanner does
//! not: reading files and prompt lines, printing tokens, formatting
//! lexical errors as `[line N] Error: ...`, and choosing exit codes.
//!
//! The runners are written against `BufRead`/`Write` so tests can drive
//! them with in-memory buffers.

mod report;
mod run;
mod tracing_setup;

pub use report::{format_lex_error, report_lex_errors};
pub use run::{read_source, run_file, run_prompt, run_source, RunOutcome};
pub use tracing_setup::init_tracing;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit status for command-line usage errors.
pub const EXIT_USAGE: i32 = 64;
/// Exit status when the script has lexical errors.
pub const EXIT_DATA_ERR: i32 = 65;
/// Exit status for I/O failures.
pub const EXIT_IO_ERR: i32 = 74;

/// Failures of the driver itself, as opposed to errors in the scanned
/// source (those are [`lox_lexer::LexError`] values).
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot find file '{}'", path.display())]
    NotFound { path: PathBuf },
    #[error("permission denied reading '{}'", path.display())]
    PermissionDenied { path: PathBuf },
    #[error("'{}' contains invalid UTF-8 data", path.display())]
    InvalidUtf8 { path: PathBuf },
    #[error("error reading '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl DriverError {
    /// Classify a failed read of `path`.
    pub fn from_read(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => DriverError::NotFound { path },
            io::ErrorKind::PermissionDenied => DriverError::PermissionDenied { path },
            io::ErrorKind::InvalidData => DriverError::InvalidUtf8 { path },
            _ => DriverError::Read { path, source: err },
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        EXIT_IO_ERR
    }
}
