//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner walks a sentinel-terminated [`Cursor`] and never allocates.
//! It does not resolve keywords or parse literal values, and it does not
//! track lines: those are the cooking layer's job.
//!
//! # Design
//!
//! `next_token` dispatches on the current byte. Each arm calls a focused
//! method that advances the cursor and returns a [`RawToken`]. The sentinel
//! byte (`0x00`) dispatches to `eof()`. Every non-EOF token has a positive
//! length, so the scanner always makes progress.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Allocation-free scanner producing one raw token per call.
///
/// Error conditions are encoded as [`RawTag`] variants, not as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted,
    /// and keeps returning it on later calls.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(start),
            b' ' | b'\t' => self.whitespace(start),
            b'\r' => self.carriage_return(start),
            b'\n' => self.single(start, RawTag::Newline),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.string(start),
            b'/' => self.slash_or_comment(start),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b',' => self.single(start, RawTag::Comma),
            b'.' => self.single(start, RawTag::Dot),
            b'-' => self.single(start, RawTag::Minus),
            b'+' => self.single(start, RawTag::Plus),
            b';' => self.single(start, RawTag::Semicolon),
            b'*' => self.single(start, RawTag::Star),
            b'!' => self.with_equal(start, RawTag::Bang, RawTag::BangEqual),
            b'=' => self.with_equal(start, RawTag::Equal, RawTag::EqualEqual),
            b'<' => self.with_equal(start, RawTag::Less, RawTag::LessEqual),
            b'>' => self.with_equal(start, RawTag::Greater, RawTag::GreaterEqual),
            _ => self.invalid_char(start),
        }
    }

    #[inline]
    fn finish(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── EOF ────────────────────────────────────────────────────────

    fn eof(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            // Interior null byte.
            self.cursor.advance();
            self.finish(start, RawTag::InvalidChar)
        }
    }

    // ─── Whitespace & Newlines ──────────────────────────────────────

    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.finish(start, RawTag::Whitespace)
    }

    fn carriage_return(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '\r'
        if self.cursor.current() == b'\n' {
            // \r\n is one line break
            self.cursor.advance();
            self.finish(start, RawTag::Newline)
        } else {
            // lone \r is horizontal whitespace
            self.finish(start, RawTag::Whitespace)
        }
    }

    // ─── Comments ───────────────────────────────────────────────────

    fn slash_or_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume first '/'
        if self.cursor.current() == b'/' {
            self.cursor.eat_until_newline_or_eof();
            self.finish(start, RawTag::LineComment)
        } else {
            self.finish(start, RawTag::Slash)
        }
    }

    // ─── Identifiers & Literals ─────────────────────────────────────

    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        self.finish(start, RawTag::Ident)
    }

    /// `digits ('.' digits)?`. The `.` is only taken when a digit follows it.
    fn number(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance(); // consume '.'
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
        self.finish(start, RawTag::Number)
    }

    /// A string ends at the next `"` on the same line.
    ///
    /// On a line break or EOF the run stops before the delimiter and is
    /// tagged `UnterminatedString`; the line break is scanned next as an
    /// ordinary newline.
    fn string(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume opening '"'
        if self.cursor.eat_string_body() == b'"' {
            self.cursor.advance(); // consume closing '"'
            self.finish(start, RawTag::String)
        } else {
            self.finish(start, RawTag::UnterminatedString)
        }
    }

    // ─── Operators ──────────────────────────────────────────────────

    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.finish(start, tag)
    }

    /// One-character operator, or its `=`-suffixed form when `=` follows.
    fn with_equal(&mut self, start: u32, one: RawTag, two: RawTag) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            self.finish(start, two)
        } else {
            self.finish(start, one)
        }
    }

    // ─── Errors ─────────────────────────────────────────────────────

    fn invalid_char(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        self.finish(start, RawTag::InvalidChar)
    }
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Tokenize a source string and collect all raw tokens except the final `Eof`.
///
/// For streaming access, construct a `SourceBuffer` + `RawScanner` directly.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buf.cursor());
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        if tok.tag == RawTag::Eof {
            break;
        }
        tokens.push(tok);
    }
    tokens
}

#[cfg(test)]
mod tests;
