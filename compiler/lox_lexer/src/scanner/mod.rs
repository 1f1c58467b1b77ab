//! The scanner: one pass from source text to tokens.
//!
//! Raw runs come from [`RawScanner`]; this layer "cooks" each one. Fixed-text
//! runs become tokens directly, identifiers go through keyword lookup,
//! literal runs get their values parsed, newline runs advance the line
//! counter, and error runs become [`LexError`]s. Nothing here is fatal: an
//! error run is recorded and scanning continues with the next run.

use lox_lexer_core::{RawScanner, RawTag, SourceBuffer};

use crate::convert::{number_value, punctuation_kind, string_value};
use crate::{keywords, LexError, Literal, Token, TokenKind};

/// Everything one scan pass produced.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanOutput {
    /// Tokens in source order. Never contains `Eof`.
    pub tokens: Vec<Token>,
    /// Diagnostics in the order they were found.
    pub errors: Vec<LexError>,
    /// Line counter at the end of the input.
    pub line: u32,
}

impl ScanOutput {
    /// Whether at least one diagnostic was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The end-of-stream marker for the last line of the input.
    pub fn eof_token(&self) -> Token {
        Token::eof(self.line)
    }
}

/// Single-use scanner over one source buffer.
///
/// [`scan_tokens`](Self::scan_tokens) consumes the scanner, so every pass
/// starts from line 1 with no tokens and no errors.
pub struct Scanner<'src> {
    source: &'src str,
    line: u32,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Scanner {
            source,
            line: 1,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Run the pass to the end of the source.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = self.source.len()))]
    pub fn scan_tokens(mut self) -> ScanOutput {
        let source = self.source;
        let buf = SourceBuffer::new(source);
        let mut raw = RawScanner::new(buf.cursor());
        let mut offset = 0usize;

        loop {
            let tok = raw.next_token();
            if tok.tag == RawTag::Eof {
                break;
            }
            let end = offset + tok.len as usize;
            self.cook(tok.tag, &source[offset..end]);
            offset = end;
        }

        tracing::debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            lines = self.line,
            "scan finished"
        );

        ScanOutput {
            tokens: self.tokens,
            errors: self.errors,
            line: self.line,
        }
    }

    fn cook(&mut self, tag: RawTag, text: &str) {
        if tag.is_trivia() {
            if tag == RawTag::Newline {
                self.line += 1;
            }
            return;
        }
        if tag.is_error() {
            self.report_run(tag, text);
            return;
        }
        if let Some(kind) = punctuation_kind(tag) {
            self.push(kind, text, None);
            return;
        }
        match tag {
            RawTag::Ident => {
                let kind = keywords::lookup(text).unwrap_or(TokenKind::Identifier);
                self.push(kind, text, None);
            }
            RawTag::Number => {
                let value = number_value(text);
                self.push(TokenKind::Number, text, Some(Literal::Number(value)));
            }
            RawTag::String => {
                let value = string_value(text).to_owned();
                self.push(TokenKind::String, text, Some(Literal::String(value)));
            }
            _ => {}
        }
    }

    /// Turn an error run into a diagnostic on the current line.
    fn report_run(&mut self, tag: RawTag, text: &str) {
        let error = match (tag, text.chars().next()) {
            (RawTag::UnterminatedString, _) => LexError::unterminated_string(self.line),
            (_, Some(ch)) => LexError::unexpected_character(self.line, ch),
            (_, None) => return,
        };
        self.report(error);
    }

    fn push(&mut self, kind: TokenKind, lexeme: &str, literal: Option<Literal>) {
        let token = Token::new(kind, lexeme, self.line, literal);
        tracing::trace!(%token, line = self.line, "token");
        self.tokens.push(token);
    }

    fn report(&mut self, error: LexError) {
        tracing::debug!(line = error.line, kind = ?error.kind, "lexical error");
        self.errors.push(error);
    }
}

/// Scan `source` in one pass with a fresh [`Scanner`].
pub fn scan(source: &str) -> ScanOutput {
    Scanner::new(source).scan_tokens()
}
