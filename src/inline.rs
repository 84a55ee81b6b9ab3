/// Inline markdown tokenizer and span-to-node conversion
use serde::{Deserialize, Serialize};

use crate::error::ConvertError;
use crate::node::HtmlNode;

/// A contiguous run of inline text tagged with one style.
///
/// `Image`/`Link` carry their URL; the tokenizer always fills it in, so a
/// `None` there only arises from hand-built spans and is rejected at
/// conversion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TextSpan {
    Plain(String),
    Bold(String),
    Italic(String),
    Code(String),
    Image { alt: String, url: Option<String> },
    Link { text: String, url: Option<String> },
}

impl TextSpan {
    /// Convert this span to the leaf node that renders it.
    pub fn into_node(self) -> Result<HtmlNode, ConvertError> {
        match self {
            TextSpan::Plain(text) => Ok(HtmlNode::text(text)),
            TextSpan::Bold(text) => Ok(HtmlNode::leaf("b", text)),
            TextSpan::Italic(text) => Ok(HtmlNode::leaf("i", text)),
            TextSpan::Code(text) => Ok(HtmlNode::leaf("code", text)),
            TextSpan::Link { text, url } => {
                let url = url.ok_or(ConvertError::MissingUrl("link"))?;
                Ok(HtmlNode::leaf_with_attrs(
                    "a",
                    text,
                    vec![("href".to_string(), url)],
                ))
            }
            TextSpan::Image { alt, url } => {
                let url = url.ok_or(ConvertError::MissingUrl("image"))?;
                Ok(HtmlNode::leaf_with_attrs(
                    "img",
                    "",
                    vec![("src".to_string(), url), ("alt".to_string(), alt)],
                ))
            }
        }
    }
}

/// Tokenize raw text into an ordered sequence of spans.
///
/// Stages run in a fixed order, each re-splitting only the spans still
/// tagged `Plain`: code, bold, italic delimiters, then images, then links.
/// Output order matches left-to-right position in the input.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>, ConvertError> {
    let spans = vec![TextSpan::Plain(text.to_string())];
    let spans = split_delimiter(spans, "`", TextSpan::Code)?;
    let spans = split_delimiter(spans, "**", TextSpan::Bold)?;
    let spans = split_delimiter(spans, "_", TextSpan::Italic)?;
    let spans = split_matches(spans, find_image, image_span);
    Ok(split_matches(spans, find_link, link_span))
}

/// Split every `Plain` span on `delimiter`, tagging the delimited sections
/// with `make`.
///
/// Splitting must produce an odd number of sections (plain/delimited
/// alternating, plain at both ends); an even count means an unclosed
/// delimiter. Empty sections from boundary or adjacent delimiters are
/// dropped.
fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    make: fn(String) -> TextSpan,
) -> Result<Vec<TextSpan>, ConvertError> {
    let mut out = Vec::new();
    for span in spans {
        let TextSpan::Plain(text) = span else {
            out.push(span);
            continue;
        };
        if !text.contains(delimiter) {
            out.push(TextSpan::Plain(text));
            continue;
        }
        let sections: Vec<&str> = text.split(delimiter).collect();
        if sections.len() % 2 == 0 {
            return Err(ConvertError::MalformedDelimiter(delimiter.to_string()));
        }
        for (i, section) in sections.iter().enumerate() {
            if section.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(TextSpan::Plain(section.to_string()));
            } else {
                out.push(make(section.to_string()));
            }
        }
    }
    Ok(out)
}

fn image_span(alt: String, url: String) -> TextSpan {
    TextSpan::Image {
        alt,
        url: Some(url),
    }
}

fn link_span(text: String, url: String) -> TextSpan {
    TextSpan::Link {
        text,
        url: Some(url),
    }
}

/// Replace every image/link match in each `Plain` span, keeping the
/// unmatched stretches as `Plain`. A span with no matches passes through
/// unchanged; empty stretches between matches are dropped, but a matched
/// empty alt/anchor text survives as a zero-length string.
fn split_matches(
    spans: Vec<TextSpan>,
    find: fn(&str, usize) -> Option<InlineMatch>,
    make: fn(String, String) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::new();
    for span in spans {
        let TextSpan::Plain(text) = span else {
            out.push(span);
            continue;
        };
        let mut cursor = 0;
        while let Some(m) = find(&text, cursor) {
            if m.start > cursor {
                out.push(TextSpan::Plain(text[cursor..m.start].to_string()));
            }
            out.push(make(m.text, m.url));
            cursor = m.end;
        }
        if cursor == 0 {
            // Nothing matched; keep the span as-is (even when empty).
            out.push(TextSpan::Plain(text));
        } else if cursor < text.len() {
            out.push(TextSpan::Plain(text[cursor..].to_string()));
        }
    }
    out
}

/// One image or link occurrence: byte range in the source plus the
/// bracketed text and parenthesized url.
struct InlineMatch {
    start: usize,
    end: usize,
    text: String,
    url: String,
}

/// Find the next `![alt](url)` at or after `from`.
fn find_image(text: &str, from: usize) -> Option<InlineMatch> {
    let mut search = from;
    while let Some(rel) = text[search..].find("![") {
        let start = search + rel;
        if let Some((alt, url, len)) = parse_bracket_pair(&text[start + 2..]) {
            return Some(InlineMatch {
                start,
                end: start + 2 + len,
                text: alt,
                url,
            });
        }
        search = start + 2;
    }
    None
}

/// Find the next `[text](url)` at or after `from`, skipping candidates
/// preceded by `!` (those are image syntax).
fn find_link(text: &str, from: usize) -> Option<InlineMatch> {
    let mut search = from;
    while let Some(rel) = text[search..].find('[') {
        let start = search + rel;
        let is_image = start > 0 && text.as_bytes()[start - 1] == b'!';
        if !is_image {
            if let Some((anchor, url, len)) = parse_bracket_pair(&text[start + 1..]) {
                return Some(InlineMatch {
                    start,
                    end: start + 1 + len,
                    text: anchor,
                    url,
                });
            }
        }
        search = start + 1;
    }
    None
}

/// Parse `text](url)` where `rest` begins just inside the opening bracket.
///
/// Matching is non-greedy: the first `]` ends the text and must be followed
/// immediately by `(`, and the first `)` ends the url. Nested brackets are
/// not supported. Returns the text, the url, and the number of bytes
/// consumed from `rest`.
fn parse_bracket_pair(rest: &str) -> Option<(String, String, usize)> {
    let close = rest.find(']')?;
    if !rest[close + 1..].starts_with('(') {
        return None;
    }
    let url_start = close + 2;
    let url_len = rest[url_start..].find(')')?;
    let text = rest[..close].to_string();
    let url = rest[url_start..url_start + url_len].to_string();
    Some((text, url, url_start + url_len + 1))
}
