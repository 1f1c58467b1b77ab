//! Low-level raw scanner for Lox.
//!
//! This crate has no `lox_*` dependencies. It turns source text into
//! `(RawTag, len)` pairs over a sentinel-terminated buffer:
//!
//! - [`SourceBuffer`] owns a padded copy of the source.
//! - [`Cursor`] walks it byte by byte with one byte of lookahead.
//! - [`RawScanner`] classifies byte runs, including trivia and errors.
//!
//! Keyword resolution, literal values, line numbers and diagnostics belong
//! to `lox_lexer`.

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::{SourceBuffer, MAX_SOURCE_LEN};
pub use tag::{RawTag, RawToken};
