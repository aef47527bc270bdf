//! Clyp syntax highlighting for the website.
//!
//! Builds on the raw scanner in `clyp_lexer_core`:
//!
//! ```text
//! &str ──► clyp_lexer_core::tokenize ──► cook ──► Vec<Token> ──► html ──► String
//! ```
//!
//! The raw scanner splits the source into tagged spans; cooking resolves
//! identifiers against the keyword, type and builtin tables and picks out
//! function and class names; rendering escapes every span and wraps the
//! classified ones in `<span class="..">`.
//!
//! Highlighting never fails. Text the rules do not recognize is passed
//! through as escaped plain text, and stripping the markup from the output
//! and decoding entities gives back the input byte for byte.
//!
//! [`render_markdown`] renders release notes, highlighting the `clyp` code
//! blocks inside them.

mod cook;
mod html;
mod markdown;
mod token;
mod words;

pub use cook::tokenize;
pub use html::{render_plain, render_tokens};
pub use markdown::render_markdown;
pub use token::{Token, TokenKind};
pub use words::{word_kind, BUILTINS, KEYWORDS, TYPES};

/// Languages the highlighter understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    /// Clyp source: tokenized and classified.
    Clyp,
    /// Anything else: escaped and wrapped, never classified.
    Plain,
}

impl Language {
    /// Tag used by callers (and the `language-*` code class) for Clyp.
    pub const CLYP_TAG: &'static str = "clyp";

    /// Resolve a caller-supplied language tag. A missing tag means Clyp.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            None | Some(Self::CLYP_TAG) => Self::Clyp,
            Some(_) => Self::Plain,
        }
    }
}

/// Highlight Clyp source as an HTML fragment.
pub fn highlight(source: &str) -> String {
    render_tokens(&tokenize(source))
}

/// Highlight `source` according to an optional language tag.
///
/// Only Clyp is classified; any other tag yields the escaped source in the
/// same container without token markup.
pub fn highlight_with_language(source: &str, language: Option<&str>) -> String {
    match Language::from_tag(language) {
        Language::Clyp => highlight(source),
        Language::Plain => render_plain(source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_tag_means_clyp() {
        assert_eq!(Language::from_tag(None), Language::Clyp);
        assert_eq!(Language::from_tag(Some("clyp")), Language::Clyp);
        assert_eq!(Language::from_tag(Some("python")), Language::Plain);
        assert_eq!(Language::from_tag(Some("")), Language::Plain);
    }

    #[test]
    fn other_languages_are_not_classified() {
        let html = highlight_with_language("if x < 1", Some("python"));
        assert_eq!(
            html,
            "<div class=\"highlight\"><pre><code>if x &lt; 1</code></pre></div>"
        );
    }

    #[test]
    fn clyp_tag_matches_default() {
        let source = "let x = 1;";
        assert_eq!(
            highlight_with_language(source, Some("clyp")),
            highlight_with_language(source, None)
        );
    }
}
