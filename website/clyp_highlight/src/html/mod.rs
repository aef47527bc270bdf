//! HTML rendering of cooked tokens.
//!
//! Output shape (one line, no added whitespace):
//!
//! ```text
//! <div class="highlight"><pre><code class="language-clyp">
//!   escaped text | <span class="k">escaped text</span> ...
//! </code></pre></div>
//! ```
//!
//! Every byte of source text goes through the quoted-attribute encoder, so
//! `&`, `<`, `>`, `"` and `'` never reach the output raw.

use html_escape::encode_quoted_attribute_to_string;

use crate::Token;

const CLYP_OPEN: &str = r#"<div class="highlight"><pre><code class="language-clyp">"#;
const PLAIN_OPEN: &str = r#"<div class="highlight"><pre><code>"#;
const CLOSE: &str = "</code></pre></div>";

/// Render classified tokens inside the Clyp code container.
pub fn render_tokens(tokens: &[Token<'_>]) -> String {
    let text_len: usize = tokens.iter().map(|t| t.text.len()).sum();
    // Rough guess: escaping plus ~20 bytes of markup per styled token.
    let mut out = String::with_capacity(CLYP_OPEN.len() + text_len * 2 + tokens.len() * 20);

    out.push_str(CLYP_OPEN);
    for token in tokens {
        match token.kind.css_class() {
            Some(class) => {
                out.push_str("<span class=\"");
                out.push_str(class);
                out.push_str("\">");
                encode_quoted_attribute_to_string(token.text, &mut out);
                out.push_str("</span>");
            }
            None => {
                encode_quoted_attribute_to_string(token.text, &mut out);
            }
        }
    }
    out.push_str(CLOSE);
    out
}

/// Escape `source` and wrap it without any token markup.
pub fn render_plain(source: &str) -> String {
    let mut out = String::with_capacity(PLAIN_OPEN.len() + source.len() + CLOSE.len());
    out.push_str(PLAIN_OPEN);
    encode_quoted_attribute_to_string(source, &mut out);
    out.push_str(CLOSE);
    out
}
