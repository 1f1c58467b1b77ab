//! Command handlers for the `lox` CLI.
//!
//! Each handler returns the process exit status on success, or a
//! [`CliError`] when it could not run at all. Shared helpers like
//! `read_file` live here in the module root.

use std::io::{self, Write};

use crate::error::CliError;

mod tokenize;

pub use tokenize::{tokenize_file, tokenize_source, write_diagnostics, write_tokens};

/// Success.
pub const EXIT_OK: i32 = 0;
/// Bad invocation or unreadable input.
pub const EXIT_USAGE: i32 = 1;
/// The input had lexical errors (`EX_DATAERR`).
pub const EXIT_DATA_ERR: i32 = 65;

/// Read a source file, classifying the failure.
pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    let source = std::fs::read_to_string(path).map_err(|e| CliError::from_read(path, e))?;
    check_source_len(path, source.len())?;
    Ok(source)
}

/// Reject sources the scanner cannot address to the end.
fn check_source_len(path: &str, bytes: usize) -> Result<(), CliError> {
    if bytes > lox_lexer::MAX_SOURCE_LEN {
        return Err(CliError::TooLarge {
            path: path.to_owned(),
            bytes,
        });
    }
    Ok(())
}

/// Write the help text.
pub fn write_usage(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Lox scanner")?;
    writeln!(out)?;
    writeln!(out, "Usage: lox <command> [arguments]")?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  tokenize <file>   Scan a file and print its tokens")?;
    writeln!(out, "  help              Show this help message")?;
    writeln!(out, "  version           Show version information")?;
    writeln!(out)?;
    writeln!(
        out,
        "Source files may be at most {} bytes.",
        lox_lexer::MAX_SOURCE_LEN
    )?;
    writeln!(out)?;
    writeln!(out, "Environment:")?;
    writeln!(out, "  RUST_LOG          Enable scanner logging (e.g. RUST_LOG=lox_lexer=trace)")?;
    writeln!(out, "  LOX_LOG_TREE      With RUST_LOG, print logs as an indented span tree")?;
    Ok(())
}

/// Write the version line.
pub fn write_version(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "lox {}", env!("CARGO_PKG_VERSION"))
}
