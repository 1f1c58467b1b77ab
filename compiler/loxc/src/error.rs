//! Errors that stop the CLI before or after a scan.
//!
//! Lexical errors are not here: they are reported per line and only affect
//! the exit status.

use std::io;

use crate::commands::EXIT_USAGE;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Usage: lox tokenize <filename>")]
    Usage,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error(
        "'{path}' is too large to scan ({bytes} bytes, limit {limit})",
        limit = lox_lexer::MAX_SOURCE_LEN
    )]
    TooLarge { path: String, bytes: usize },

    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Writing to stdout or stderr failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    /// Classify a failed read of `path`.
    pub fn from_read(path: &str, err: io::Error) -> Self {
        let path = path.to_owned();
        match err.kind() {
            io::ErrorKind::NotFound => CliError::NotFound { path },
            io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            io::ErrorKind::InvalidData => CliError::InvalidUtf8 { path },
            _ => CliError::Read { path, source: err },
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        EXIT_USAGE
    }

    /// Whether the usage text should follow the message.
    pub fn wants_usage(&self) -> bool {
        matches!(self, CliError::UnknownCommand(_))
    }
}
