//! Markdown to HTML for release notes.
//!
//! CommonMark plus tables and `~~strikethrough~~`. On top of the parser's
//! event stream:
//!
//! - fenced code blocks tagged `clyp` go through the Clyp highlighter; any
//!   other tag gets the plain escaped container; untagged blocks render as
//!   a bare `<pre><code>`
//! - bare `http://` and `https://` URLs in text become links
//! - raw HTML is escaped, never passed through

use html_escape::{encode_double_quoted_attribute_to_string, encode_text_to_string};
use pulldown_cmark::{
    html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd, TextMergeStream,
};

use crate::highlight_with_language;

/// Render Markdown `source` as an HTML fragment.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let events = rewrite(TextMergeStream::new(Parser::new_ext(source, options)));
    let mut out = String::with_capacity(source.len() + source.len() / 2);
    html::push_html(&mut out, events.into_iter());
    out
}

/// A fenced or indented block being collected.
struct CodeBlock {
    language: Option<String>,
    body: String,
}

fn rewrite<'a>(events: impl Iterator<Item = Event<'a>>) -> Vec<Event<'a>> {
    let mut out = Vec::new();
    let mut code: Option<CodeBlock> = None;
    // Text inside a link is never linked again.
    let mut link_depth = 0usize;

    for event in events {
        if let Some(block) = code.as_mut() {
            match event {
                Event::Text(text) => block.body.push_str(&text),
                Event::End(TagEnd::CodeBlock) => {
                    if let Some(block) = code.take() {
                        out.push(Event::Html(render_code_block(&block).into()));
                    }
                }
                _ => {}
            }
            continue;
        }

        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                code = Some(CodeBlock {
                    language: block_language(&kind),
                    body: String::new(),
                });
            }
            Event::Start(Tag::Link { .. }) => {
                link_depth += 1;
                out.push(event);
            }
            Event::End(TagEnd::Link) => {
                link_depth = link_depth.saturating_sub(1);
                out.push(event);
            }
            Event::Text(text) if link_depth == 0 => autolink(&text, &mut out),
            Event::Html(raw) | Event::InlineHtml(raw) => out.push(Event::Text(raw)),
            other => out.push(other),
        }
    }
    out
}

/// First word of a fence's info string, if any.
fn block_language(kind: &CodeBlockKind<'_>) -> Option<String> {
    match kind {
        CodeBlockKind::Fenced(info) => info.split_whitespace().next().map(str::to_owned),
        CodeBlockKind::Indented => None,
    }
}

fn render_code_block(block: &CodeBlock) -> String {
    match &block.language {
        Some(language) => highlight_with_language(&block.body, Some(language)),
        None => {
            let mut html = String::with_capacity(block.body.len() + 24);
            html.push_str("<pre><code>");
            encode_text_to_string(&block.body, &mut html);
            html.push_str("</code></pre>");
            html
        }
    }
}

/// Split `text` around bare URLs, pushing text and link events.
fn autolink(text: &str, out: &mut Vec<Event<'_>>) {
    let mut rest = text;
    while let Some((start, end)) = find_url(rest) {
        if start > 0 {
            out.push(Event::Text(CowStr::from(rest[..start].to_owned())));
        }
        out.push(Event::Html(link_html(&rest[start..end]).into()));
        rest = &rest[end..];
    }
    if !rest.is_empty() {
        out.push(Event::Text(CowStr::from(rest.to_owned())));
    }
}

/// Byte range of the first bare URL in `text`.
///
/// A URL runs to the next whitespace or `<`, minus trailing punctuation
/// that usually ends the sentence around it.
fn find_url(text: &str) -> Option<(usize, usize)> {
    let start = ["https://", "http://"]
        .iter()
        .filter_map(|scheme| text.find(scheme).map(|at| (at, scheme.len())))
        .min_by_key(|&(at, _)| at);
    let (start, scheme_len) = start?;

    let tail = &text[start..];
    let run = tail
        .find(|c: char| c.is_whitespace() || c == '<')
        .unwrap_or(tail.len());
    let url = tail[..run].trim_end_matches(['.', ',', ':', ';', '"', '\'', ')', ']']);
    if url.len() <= scheme_len {
        // A scheme with nothing after it: skip past it as text.
        let skip = start + scheme_len;
        return find_url(&text[skip..]).map(|(s, e)| (s + skip, e + skip));
    }
    Some((start, start + url.len()))
}

fn link_html(url: &str) -> String {
    let mut html = String::with_capacity(url.len() * 2 + 15);
    html.push_str("<a href=\"");
    encode_double_quoted_attribute_to_string(url, &mut html);
    html.push_str("\">");
    encode_text_to_string(url, &mut html);
    html.push_str("</a>");
    html
}
