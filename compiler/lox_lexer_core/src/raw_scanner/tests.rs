use super::*;
use crate::SourceBuffer;
use pretty_assertions::assert_eq;

/// Helper: scan and return tags only.
fn scan_tags(source: &str) -> Vec<RawTag> {
    tokenize(source).iter().map(|t| t.tag).collect()
}

/// Helper: scan and pair each tag with the text it covers.
fn scan_pieces(source: &str) -> Vec<(RawTag, &str)> {
    let mut offset = 0usize;
    tokenize(source)
        .into_iter()
        .map(|tok| {
            let end = offset + tok.len as usize;
            let piece = (tok.tag, &source[offset..end]);
            offset = end;
            piece
        })
        .collect()
}

// ─── Coverage Properties ────────────────────────────────────────

#[test]
fn total_len_equals_source_len() {
    let sources = [
        "",
        "x",
        "var a = 1;",
        "print \"hi\";\n// done",
        "(( )){} // grouping stuff",
        "!*+-/=<> <= == != >=",
        "  \t\n  \r\n  \r",
        "\"unterminated",
        "@#$ \u{e9}\u{20ac}",
        "123.456.789",
    ];
    for source in sources {
        let total: u32 = tokenize(source).iter().map(|t| t.len).sum();
        assert_eq!(total as usize, source.len(), "length mismatch for {source:?}");
    }
}

#[test]
fn every_token_has_positive_length() {
    for source in ["var x = 1;", "+-*/", "\"s\" \"t", "\0\0", "\u{1F600}"] {
        for tok in tokenize(source) {
            assert!(tok.len > 0, "zero-length token {tok:?} in {source:?}");
        }
    }
}

#[test]
fn repeated_eof_returns_eof() {
    let buf = SourceBuffer::new("");
    let mut scanner = RawScanner::new(buf.cursor());
    for _ in 0..3 {
        assert_eq!(
            scanner.next_token(),
            RawToken {
                tag: RawTag::Eof,
                len: 0
            }
        );
    }
}

// ─── Punctuation & Operators ────────────────────────────────────

#[test]
fn single_character_punctuation() {
    assert_eq!(
        scan_tags("(){},.-+;*/"),
        vec![
            RawTag::LeftParen,
            RawTag::RightParen,
            RawTag::LeftBrace,
            RawTag::RightBrace,
            RawTag::Comma,
            RawTag::Dot,
            RawTag::Minus,
            RawTag::Plus,
            RawTag::Semicolon,
            RawTag::Star,
            RawTag::Slash,
        ]
    );
}

#[test]
fn two_character_operators_are_greedy() {
    assert_eq!(
        scan_tags("!= == <= >="),
        vec![
            RawTag::BangEqual,
            RawTag::Whitespace,
            RawTag::EqualEqual,
            RawTag::Whitespace,
            RawTag::LessEqual,
            RawTag::Whitespace,
            RawTag::GreaterEqual,
        ]
    );
}

#[test]
fn one_character_operators_without_equal() {
    assert_eq!(
        scan_tags("! = < >"),
        vec![
            RawTag::Bang,
            RawTag::Whitespace,
            RawTag::Equal,
            RawTag::Whitespace,
            RawTag::Less,
            RawTag::Whitespace,
            RawTag::Greater,
        ]
    );
}

#[test]
fn triple_equal_is_equal_equal_then_equal() {
    assert_eq!(scan_tags("==="), vec![RawTag::EqualEqual, RawTag::Equal]);
}

// ─── Comments & Newlines ────────────────────────────────────────

#[test]
fn line_comment_stops_before_newline() {
    assert_eq!(
        scan_pieces("// note\n/"),
        vec![
            (RawTag::LineComment, "// note"),
            (RawTag::Newline, "\n"),
            (RawTag::Slash, "/"),
        ]
    );
}

#[test]
fn comment_at_eof() {
    assert_eq!(scan_pieces("//"), vec![(RawTag::LineComment, "//")]);
}

#[test]
fn crlf_is_one_newline() {
    assert_eq!(
        scan_pieces("a\r\nb"),
        vec![
            (RawTag::Ident, "a"),
            (RawTag::Newline, "\r\n"),
            (RawTag::Ident, "b"),
        ]
    );
}

#[test]
fn lone_carriage_return_is_whitespace() {
    assert_eq!(scan_tags("\r"), vec![RawTag::Whitespace]);
}

// ─── Literals ───────────────────────────────────────────────────

#[test]
fn number_with_fraction() {
    assert_eq!(scan_pieces("123.45"), vec![(RawTag::Number, "123.45")]);
}

#[test]
fn number_with_trailing_dot_leaves_dot() {
    assert_eq!(
        scan_pieces("123."),
        vec![(RawTag::Number, "123"), (RawTag::Dot, ".")]
    );
}

#[test]
fn number_takes_at_most_one_fraction() {
    assert_eq!(
        scan_pieces("1.2.3"),
        vec![
            (RawTag::Number, "1.2"),
            (RawTag::Dot, "."),
            (RawTag::Number, "3"),
        ]
    );
}

#[test]
fn identifier_with_digits_and_underscores() {
    assert_eq!(
        scan_pieces("_foo_1 bar2"),
        vec![
            (RawTag::Ident, "_foo_1"),
            (RawTag::Whitespace, " "),
            (RawTag::Ident, "bar2"),
        ]
    );
}

#[test]
fn string_includes_quotes() {
    assert_eq!(
        scan_pieces("\"hello world\";"),
        vec![(RawTag::String, "\"hello world\""), (RawTag::Semicolon, ";")]
    );
}

#[test]
fn empty_string() {
    assert_eq!(scan_pieces("\"\""), vec![(RawTag::String, "\"\"")]);
}

#[test]
fn unterminated_string_at_eof() {
    assert_eq!(
        scan_pieces("\"unterminated"),
        vec![(RawTag::UnterminatedString, "\"unterminated")]
    );
}

#[test]
fn unterminated_string_stops_at_line_break() {
    assert_eq!(
        scan_pieces("\"open\n)"),
        vec![
            (RawTag::UnterminatedString, "\"open"),
            (RawTag::Newline, "\n"),
            (RawTag::RightParen, ")"),
        ]
    );
}

// ─── Invalid Characters ─────────────────────────────────────────

#[test]
fn invalid_ascii_characters_are_one_byte_each() {
    assert_eq!(
        scan_pieces("@#"),
        vec![(RawTag::InvalidChar, "@"), (RawTag::InvalidChar, "#")]
    );
}

#[test]
fn invalid_multibyte_character_is_one_token() {
    assert_eq!(
        scan_pieces("\u{e9}x"),
        vec![(RawTag::InvalidChar, "\u{e9}"), (RawTag::Ident, "x")]
    );
}

#[test]
fn interior_null_is_invalid_not_eof() {
    assert_eq!(
        scan_tags("a\0b"),
        vec![RawTag::Ident, RawTag::InvalidChar, RawTag::Ident]
    );
}

mod proptest_coverage {
    use super::super::tokenize;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn lengths_cover_arbitrary_source(source in any::<String>()) {
            let total: u64 = tokenize(&source).iter().map(|t| u64::from(t.len)).sum();
            prop_assert_eq!(total, source.len() as u64);
        }

        #[test]
        fn token_boundaries_fall_on_char_boundaries(source in "[ -~\n\r\t\u{e9}\u{20ac}]{0,64}") {
            let mut offset = 0usize;
            for tok in tokenize(&source) {
                offset += tok.len as usize;
                prop_assert!(source.is_char_boundary(offset), "split inside a char at {}", offset);
            }
        }
    }
}
