//! `lox tokenize <file>`: print the token stream and its diagnostics.

use std::io::{self, Write};

use lox_lexer::{scan, LexError, Token};

use super::{read_file, EXIT_DATA_ERR, EXIT_OK};
use crate::error::CliError;

/// One `Display` line per token, then the end-of-stream line.
pub fn write_tokens(out: &mut impl Write, tokens: &[Token], eof: &Token) -> io::Result<()> {
    for token in tokens {
        writeln!(out, "{token}")?;
    }
    writeln!(out, "{eof}")
}

/// One `[line N] Error: ...` line per diagnostic.
pub fn write_diagnostics(err: &mut impl Write, errors: &[LexError]) -> io::Result<()> {
    for error in errors {
        writeln!(err, "{error}")?;
    }
    Ok(())
}

/// Scan `source` and render the result.
///
/// Diagnostics go to `err` before tokens go to `out`, so a terminal shows
/// them above the token listing. Returns 65 when any diagnostic was written.
pub fn tokenize_source(
    source: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<i32, CliError> {
    let output = scan(source);
    write_diagnostics(err, &output.errors)?;
    write_tokens(out, &output.tokens, &output.eof_token())?;
    out.flush()?;

    if output.has_errors() {
        Ok(EXIT_DATA_ERR)
    } else {
        Ok(EXIT_OK)
    }
}

/// Read `path` and tokenize it.
#[tracing::instrument(level = "info", skip(out, err))]
pub fn tokenize_file(
    path: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<i32, CliError> {
    let source = read_file(path)?;
    tracing::debug!(bytes = source.len(), "read source");
    tokenize_source(&source, out, err)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "tests write to in-memory buffers")]

    use super::*;
    use pretty_assertions::assert_eq;

    fn run(source: &str) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = tokenize_source(source, &mut out, &mut err).unwrap();
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn empty_source_prints_only_eof() {
        assert_eq!(run(""), (0, "EOF  null\n".to_owned(), String::new()));
    }

    #[test]
    fn parens() {
        let (code, out, err) = run("(()");
        assert_eq!(code, 0);
        assert_eq!(
            out,
            "LEFT_PAREN ( null\nLEFT_PAREN ( null\nRIGHT_PAREN ) null\nEOF  null\n"
        );
        assert_eq!(err, "");
    }

    #[test]
    fn literals() {
        let (code, out, _) = run("\"hi\" 42 3.50");
        assert_eq!(code, 0);
        assert_eq!(
            out,
            "STRING \"hi\" hi\nNUMBER 42 42.0\nNUMBER 3.50 3.5\nEOF  null\n"
        );
    }

    #[test]
    fn lexical_errors_exit_65_and_keep_scanning() {
        let (code, out, err) = run(",.$(#");
        assert_eq!(code, 65);
        assert_eq!(
            out,
            "COMMA , null\nDOT . null\nLEFT_PAREN ( null\nEOF  null\n"
        );
        assert_eq!(
            err,
            "[line 1] Error: Unexpected character: $\n[line 1] Error: Unexpected character: #\n"
        );
    }

    #[test]
    fn unterminated_string_reports_its_line() {
        let (code, out, err) = run("var x;\n\"oops");
        assert_eq!(code, 65);
        assert_eq!(
            out,
            "VAR var null\nIDENTIFIER x null\nSEMICOLON ; null\nEOF  null\n"
        );
        assert_eq!(err, "[line 2] Error: Unterminated string.\n");
    }

    #[test]
    fn tokenize_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.lox");
        std::fs::write(&path, "print 1;\n").unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = tokenize_file(&path.to_string_lossy(), &mut out, &mut err).unwrap();
        assert_eq!(code, 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "PRINT print null\nNUMBER 1 1.0\nSEMICOLON ; null\nEOF  null\n"
        );
    }

    #[test]
    fn tokenize_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.lox");
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = tokenize_file(&path.to_string_lossy(), &mut out, &mut err);
        assert!(matches!(result, Err(CliError::NotFound { .. })));
        assert!(out.is_empty());
    }
}
