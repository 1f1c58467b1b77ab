//! Raw token tags produced by [`RawScanner`](crate::RawScanner).
//!
//! Tags classify byte runs without interpreting them: identifiers are not
//! yet split from keywords, number and string values are not parsed, and
//! trivia and error runs are tagged rather than dropped. The `lox_lexer`
//! crate cooks these into public tokens.

/// Classification of one raw byte run.
///
/// Discriminants are grouped: punctuation and operators first, then
/// literal-bearing runs, trivia, errors, and EOF.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Single-character punctuation ===
    LeftParen = 0,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // === One- or two-character operators ===
    Bang = 16,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // === Identifiers & literals ===
    Ident = 32,
    Number,
    String,

    // === Trivia ===
    Whitespace = 48,
    Newline,
    LineComment,

    // === Errors ===
    /// A `"` whose closing quote never arrived on the same line.
    UnterminatedString = 64,
    /// One character that starts no token (e.g. `@`, `#`, a non-ASCII letter).
    InvalidChar,

    Eof = 255,
}

impl RawTag {
    /// Whitespace, newlines and comments.
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Newline | Self::LineComment)
    }

    /// Runs that the cooking layer reports as diagnostics.
    pub fn is_error(self) -> bool {
        matches!(self, Self::UnterminatedString | Self::InvalidChar)
    }
}

/// One scanned run: what it is and how many bytes it covers.
///
/// The start offset is implicit: it is the sum of the lengths of every
/// preceding token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}
