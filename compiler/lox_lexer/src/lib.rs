//! Scanner for Lox.
//!
//! Converts source text into classified [`Token`]s in one left-to-right
//! pass, collecting [`LexError`]s without stopping:
//!
//! ```
//! use lox_lexer::{scan, TokenKind};
//!
//! let output = scan("var answer = 42;");
//! assert!(!output.has_errors());
//! assert_eq!(output.tokens[0].kind, TokenKind::Var);
//! assert_eq!(output.tokens[3].to_string(), "NUMBER 42 42.0");
//! ```
//!
//! Byte-level classification lives in `lox_lexer_core`; this crate resolves
//! keywords, parses literal values, counts lines and records diagnostics.
//! The scanner does not append an `Eof` token; use
//! [`ScanOutput::eof_token`] when a terminated stream is needed.

mod convert;
mod keywords;
mod lex_error;
mod scanner;
mod token;

pub use lex_error::{LexError, LexErrorKind};
pub use lox_lexer_core::MAX_SOURCE_LEN;
pub use scanner::{scan, ScanOutput, Scanner};
pub use token::{Literal, Token, TokenKind};
