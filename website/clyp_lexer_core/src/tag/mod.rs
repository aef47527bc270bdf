//! Raw token tags and the `(tag, len)` token pair.

/// Raw token kind produced by the scanner.
///
/// Discriminants are grouped into semantic ranges so category checks are
/// a single comparison:
///
/// | Range   | Category              |
/// |---------|-----------------------|
/// | 0-15    | identifiers, literals |
/// | 32-63   | operators             |
/// | 80-95   | delimiters            |
/// | 112-127 | trivia                |
/// | 240-254 | recoverable oddities  |
/// | 255     | end of input          |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Identifiers & Literals ===
    /// `[A-Za-z_][A-Za-z0-9_]*`
    Ident = 0,
    /// `\d+`
    Int = 1,
    /// `\d+\.\d+`
    Float = 2,
    /// `"..."` with backslash escapes.
    DoubleString = 3,
    /// `'...'` with backslash escapes.
    SingleString = 4,
    /// Digits running straight into identifier characters (`123abc`).
    MalformedNumber = 5,

    // === Single-character operators ===
    Plus = 32,
    Minus = 33,
    Star = 34,
    Slash = 35,
    Percent = 36,
    Equal = 37,
    Less = 38,
    Greater = 39,
    Bang = 40,
    Ampersand = 41,
    Pipe = 42,
    Caret = 43,
    Tilde = 44,

    // === Compound operators ===
    /// `|>` pipeline.
    PipeGreater = 48,
    /// `=>`
    FatArrow = 49,
    /// `++`
    PlusPlus = 50,
    /// `--`
    MinusMinus = 51,
    /// `==`
    EqualEqual = 52,
    /// `!=`
    BangEqual = 53,
    /// `<=`
    LessEqual = 54,
    /// `>=`
    GreaterEqual = 55,
    /// `&&`
    AmpersandAmpersand = 56,
    /// `||`
    PipePipe = 57,
    /// `+=`
    PlusEqual = 58,
    /// `-=`
    MinusEqual = 59,
    /// `*=`
    StarEqual = 60,
    /// `/=`
    SlashEqual = 61,
    /// `%=`
    PercentEqual = 62,

    // === Delimiters ===
    LeftParen = 80,
    RightParen = 81,
    LeftBracket = 82,
    RightBracket = 83,
    LeftBrace = 84,
    RightBrace = 85,
    Semicolon = 86,
    Comma = 87,
    Dot = 88,
    Colon = 89,

    // === Trivia ===
    /// Spaces, tabs and lone carriage returns.
    Whitespace = 112,
    /// `\n` or `\r\n`.
    Newline = 113,
    /// `#` through end of line (newline excluded).
    LineComment = 114,

    // === Recoverable oddities ===
    /// A quote with no matching close; only the quote itself is covered.
    UnterminatedQuote = 240,
    /// Any byte or character the language has no rule for.
    Other = 241,

    // === Control ===
    Eof = 255,
}

impl RawTag {
    /// Returns `true` for single and compound operators.
    #[inline]
    pub fn is_operator(self) -> bool {
        (32..64).contains(&(self as u8))
    }

    /// Returns `true` for brackets, braces, parens and separators.
    #[inline]
    pub fn is_delimiter(self) -> bool {
        (80..96).contains(&(self as u8))
    }
}

/// A raw token: tag plus byte length. The start offset is implied by the
/// running sum of previous lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}
