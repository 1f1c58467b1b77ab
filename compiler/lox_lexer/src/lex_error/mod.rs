//! Lexical diagnostics.
//!
//! Neither error stops the scan. The scanner records each one with the line
//! it was found on and carries on; `Display` renders the exact diagnostic
//! line printed by the CLI, `[line N] Error: <message>`.

use thiserror::Error;

/// A lexical error and where it happened.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
#[error("[line {line}] Error: {kind}")]
pub struct LexError {
    /// Line counter at the moment the error was detected.
    pub line: u32,
    pub kind: LexErrorKind,
}

/// What went wrong.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// A `"` with no closing `"` before the end of its line or of the input.
    #[error("Unterminated string.")]
    UnterminatedString,
    /// A character that starts no token.
    #[error("Unexpected character: {ch}")]
    UnexpectedCharacter { ch: char },
}

impl LexError {
    pub fn unterminated_string(line: u32) -> Self {
        LexError {
            line,
            kind: LexErrorKind::UnterminatedString,
        }
    }

    pub fn unexpected_character(line: u32, ch: char) -> Self {
        LexError {
            line,
            kind: LexErrorKind::UnexpectedCharacter { ch },
        }
    }
}
