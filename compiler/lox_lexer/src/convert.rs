//! Raw tag to token kind conversion for fixed-text tokens.

use lox_lexer_core::RawTag;

use crate::TokenKind;

/// Map a punctuation or operator tag to its token kind.
///
/// Returns `None` for tags whose kind depends on the text (identifiers),
/// that carry a value (strings, numbers), or that produce no token at all
/// (trivia, errors, EOF).
pub(crate) fn punctuation_kind(tag: RawTag) -> Option<TokenKind> {
    let kind = match tag {
        RawTag::LeftParen => TokenKind::LeftParen,
        RawTag::RightParen => TokenKind::RightParen,
        RawTag::LeftBrace => TokenKind::LeftBrace,
        RawTag::RightBrace => TokenKind::RightBrace,
        RawTag::Comma => TokenKind::Comma,
        RawTag::Dot => TokenKind::Dot,
        RawTag::Minus => TokenKind::Minus,
        RawTag::Plus => TokenKind::Plus,
        RawTag::Semicolon => TokenKind::Semicolon,
        RawTag::Slash => TokenKind::Slash,
        RawTag::Star => TokenKind::Star,
        RawTag::Bang => TokenKind::Bang,
        RawTag::BangEqual => TokenKind::BangEqual,
        RawTag::Equal => TokenKind::Equal,
        RawTag::EqualEqual => TokenKind::EqualEqual,
        RawTag::Greater => TokenKind::Greater,
        RawTag::GreaterEqual => TokenKind::GreaterEqual,
        RawTag::Less => TokenKind::Less,
        RawTag::LessEqual => TokenKind::LessEqual,
        RawTag::Ident
        | RawTag::Number
        | RawTag::String
        | RawTag::Whitespace
        | RawTag::Newline
        | RawTag::LineComment
        | RawTag::UnterminatedString
        | RawTag::InvalidChar
        | RawTag::Eof => return None,
    };
    Some(kind)
}

/// Numeric value of a `digits ('.' digits)?` lexeme.
///
/// Trailing zeros of the fractional part are stripped before parsing, and
/// a fraction that strips down to nothing leaves the integer part.
pub(crate) fn number_value(lexeme: &str) -> f64 {
    let digits = if lexeme.contains('.') {
        lexeme.trim_end_matches('0').trim_end_matches('.')
    } else {
        lexeme
    };
    // The raw scanner only admits ASCII digits with at most one interior
    // '.', which `f64::from_str` always accepts.
    digits.parse().unwrap_or(f64::NAN)
}

/// Contents of a terminated string lexeme, without the quotes.
pub(crate) fn string_value(lexeme: &str) -> &str {
    lexeme
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(lexeme)
}
