//! Classified tokens.

/// Syntax category of a cooked token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Comment,
    String,
    Keyword,
    Type,
    Builtin,
    Number,
    Operator,
    Punctuation,
    /// Identifier directly followed by a call's `(`.
    Function,
    /// Identifier right after the `class` keyword.
    Class,
    Identifier,
    /// Whitespace, newlines and anything unrecognized.
    Text,
}

impl TokenKind {
    /// Short CSS class used by the site stylesheet, `None` for unstyled kinds.
    pub fn css_class(self) -> Option<&'static str> {
        let class = match self {
            Self::Comment => "c",
            Self::String => "s",
            Self::Keyword => "k",
            Self::Type => "kt",
            Self::Builtin => "nb",
            Self::Number => "m",
            Self::Operator => "op",
            Self::Punctuation => "p",
            Self::Function => "nf",
            Self::Class => "nc",
            Self::Identifier | Self::Text => return None,
        };
        Some(class)
    }
}

/// A classified span of source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Exact source text, unescaped.
    pub text: &'src str,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str) -> Self {
        Self { kind, text }
    }
}
