//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values without heap allocation. It does not resolve
//! keywords or builtins; that is the cooking layer's job.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and returns `RawToken { tag, len }`. The sentinel
//! byte (`0x00`) dispatches to `eof()`.
//!
//! Malformed input never stops the scan: a quote without a partner becomes
//! a one-byte `UnterminatedQuote` and scanning resumes right after it.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Pure, allocation-free scanner.
///
/// Produces one token at a time. Error conditions are encoded as `RawTag`
/// variants, never as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    /// Set once a `"` failed to find its closing partner. Every later `"`
    /// would fail the same way, so the lookahead is skipped from then on.
    double_unterminated: bool,
    /// Same as `double_unterminated`, for `'`.
    single_unterminated: bool,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            double_unterminated: false,
            single_unterminated: false,
        }
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(start),
            b' ' | b'\t' => self.whitespace(start),
            b'\r' => self.carriage_return(start),
            b'\n' => self.single(start, RawTag::Newline),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.string(start, b'"'),
            b'\'' => self.string(start, b'\''),
            b'#' => self.comment(start),
            b'+' => self.plus(start),
            b'-' => self.minus(start),
            b'*' => self.with_equal(start, RawTag::Star, RawTag::StarEqual),
            b'/' => self.with_equal(start, RawTag::Slash, RawTag::SlashEqual),
            b'%' => self.with_equal(start, RawTag::Percent, RawTag::PercentEqual),
            b'=' => self.equal(start),
            b'!' => self.with_equal(start, RawTag::Bang, RawTag::BangEqual),
            b'<' => self.with_equal(start, RawTag::Less, RawTag::LessEqual),
            b'>' => self.with_equal(start, RawTag::Greater, RawTag::GreaterEqual),
            b'&' => self.ampersand(start),
            b'|' => self.pipe(start),
            b'^' => self.single(start, RawTag::Caret),
            b'~' => self.single(start, RawTag::Tilde),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b';' => self.single(start, RawTag::Semicolon),
            b',' => self.single(start, RawTag::Comma),
            b'.' => self.single(start, RawTag::Dot),
            b':' => self.single(start, RawTag::Colon),
            _ => self.other(start),
        }
    }

    /// Build a token spanning `start..cursor`.
    #[inline]
    fn finish(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── EOF ─────────────────────────────────────────────────────

    fn eof(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            // Interior null byte: plain content, not the sentinel.
            self.cursor.advance();
            self.finish(start, RawTag::Other)
        }
    }

    // ─── Whitespace & Newlines ───────────────────────────────────

    #[inline]
    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.finish(start, RawTag::Whitespace)
    }

    fn carriage_return(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '\r'
        if self.cursor.current() == b'\n' {
            self.cursor.advance();
            self.finish(start, RawTag::Newline)
        } else {
            // Lone \r counts as horizontal whitespace.
            self.cursor.eat_whitespace();
            self.finish(start, RawTag::Whitespace)
        }
    }

    // ─── Comments ────────────────────────────────────────────────

    fn comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '#'
        self.cursor.eat_until_newline_or_eof();
        self.finish(start, RawTag::LineComment)
    }

    // ─── Identifiers ─────────────────────────────────────────────

    #[inline]
    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // first byte already validated
        self.cursor.eat_while(is_ident_continue);
        self.finish(start, RawTag::Ident)
    }

    // ─── Numbers ─────────────────────────────────────────────────

    fn number(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(|b| b.is_ascii_digit());

        let mut tag = RawTag::Int;
        // A dot is only part of the number when a digit follows it.
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
            tag = RawTag::Float;
        }

        if is_ident_continue(self.cursor.current()) {
            self.cursor.eat_while(is_ident_continue);
            tag = RawTag::MalformedNumber;
        }

        self.finish(start, tag)
    }

    // ─── Strings ─────────────────────────────────────────────────

    /// Scan a quoted string, honoring backslash escapes.
    ///
    /// The closing quote is searched on a copy of the cursor; the real
    /// cursor only moves once the outcome is known.
    fn string(&mut self, start: u32, quote: u8) -> RawToken {
        let (tag, known_unterminated) = if quote == b'"' {
            (RawTag::DoubleString, self.double_unterminated)
        } else {
            (RawTag::SingleString, self.single_unterminated)
        };

        if !known_unterminated {
            let mut ahead = self.cursor;
            ahead.advance(); // consume opening quote
            loop {
                match ahead.skip_to_quote_or_escape(quote) {
                    b'\\' => {
                        ahead.advance(); // consume '\'
                        if ahead.is_eof() {
                            break;
                        }
                        ahead.advance_char(); // escaped character
                    }
                    0 => break,
                    _ => {
                        ahead.advance(); // consume closing quote
                        self.cursor = ahead;
                        return self.finish(start, tag);
                    }
                }
            }

            if quote == b'"' {
                self.double_unterminated = true;
            } else {
                self.single_unterminated = true;
            }
        }

        self.cursor.advance();
        self.finish(start, RawTag::UnterminatedQuote)
    }

    // ─── Operators ───────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.finish(start, tag)
    }

    /// `x` or `x=`.
    fn with_equal(&mut self, start: u32, bare: RawTag, compound: RawTag) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            self.finish(start, compound)
        } else {
            self.finish(start, bare)
        }
    }

    fn plus(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '+'
        let tag = match self.cursor.current() {
            b'+' => RawTag::PlusPlus,
            b'=' => RawTag::PlusEqual,
            _ => return self.finish(start, RawTag::Plus),
        };
        self.cursor.advance();
        self.finish(start, tag)
    }

    fn minus(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '-'
        let tag = match self.cursor.current() {
            b'-' => RawTag::MinusMinus,
            b'=' => RawTag::MinusEqual,
            _ => return self.finish(start, RawTag::Minus),
        };
        self.cursor.advance();
        self.finish(start, tag)
    }

    fn equal(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '='
        let tag = match self.cursor.current() {
            b'=' => RawTag::EqualEqual,
            b'>' => RawTag::FatArrow,
            _ => return self.finish(start, RawTag::Equal),
        };
        self.cursor.advance();
        self.finish(start, tag)
    }

    fn ampersand(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '&'
        if self.cursor.current() == b'&' {
            self.cursor.advance();
            self.finish(start, RawTag::AmpersandAmpersand)
        } else {
            self.finish(start, RawTag::Ampersand)
        }
    }

    fn pipe(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '|'
        let tag = match self.cursor.current() {
            b'|' => RawTag::PipePipe,
            b'>' => RawTag::PipeGreater,
            _ => return self.finish(start, RawTag::Pipe),
        };
        self.cursor.advance();
        self.finish(start, tag)
    }

    // ─── Everything else ─────────────────────────────────────────

    /// Unclassified byte or non-ASCII character, consumed whole.
    fn other(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        self.finish(start, RawTag::Other)
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore. The sentinel maps to `false`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` is a valid identifier continuation byte.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Convenience function: tokenize a source string and collect all raw tokens.
///
/// Returns every token except the final `Eof`.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    RawScanner::new(buf.cursor()).collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
