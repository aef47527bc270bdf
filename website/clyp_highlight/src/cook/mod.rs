//! Cooking: raw `(tag, len)` pairs into classified [`Token`]s.
//!
//! A single left-to-right pass. Each raw span is classified exactly once,
//! so markup produced for one span can never be re-matched by a later rule.
//!
//! # Identifier resolution
//!
//! 1. Reserved tables ([`word_kind`]): keyword, then type, then builtin.
//! 2. Right after the `class` keyword (whitespace in between): class name.
//! 3. Followed by `(` (whitespace and newlines allowed): function name.
//! 4. Otherwise a plain identifier.

use clyp_lexer_core::RawTag;

use crate::words::word_kind;
use crate::{Token, TokenKind};

/// Tokenize and classify Clyp source.
///
/// Concatenating the `text` of the returned tokens reproduces `source`.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let spans = raw_spans(source);
    let mut tokens = Vec::with_capacity(spans.len());
    // Last token that was not whitespace or a newline.
    let mut prev: Option<(RawTag, &str)> = None;

    for (i, &(tag, text)) in spans.iter().enumerate() {
        let kind = match tag {
            RawTag::LineComment => TokenKind::Comment,
            RawTag::DoubleString | RawTag::SingleString => TokenKind::String,
            RawTag::Int | RawTag::Float => TokenKind::Number,
            RawTag::Ident => cook_ident(text, prev, &spans[i + 1..]),
            t if t.is_operator() => TokenKind::Operator,
            t if t.is_delimiter() => TokenKind::Punctuation,
            _ => TokenKind::Text,
        };
        tokens.push(Token::new(kind, text));

        if !is_blank(tag) {
            prev = Some((tag, text));
        }
    }

    tokens
}

/// Run the raw scanner and pair each tag with its source slice.
fn raw_spans(source: &str) -> Vec<(RawTag, &str)> {
    let mut pos = 0usize;
    clyp_lexer_core::tokenize(source)
        .into_iter()
        .map(|tok| {
            let end = pos + tok.len as usize;
            let text = source.get(pos..end).unwrap_or_default();
            pos = end;
            (tok.tag, text)
        })
        .collect()
}

fn cook_ident(text: &str, prev: Option<(RawTag, &str)>, rest: &[(RawTag, &str)]) -> TokenKind {
    if let Some(kind) = word_kind(text) {
        return kind;
    }
    if prev == Some((RawTag::Ident, "class")) {
        return TokenKind::Class;
    }
    let next = rest.iter().find(|(tag, _)| !is_blank(*tag));
    if matches!(next, Some((RawTag::LeftParen, _))) {
        return TokenKind::Function;
    }
    TokenKind::Identifier
}

#[inline]
fn is_blank(tag: RawTag) -> bool {
    matches!(tag, RawTag::Whitespace | RawTag::Newline)
}
