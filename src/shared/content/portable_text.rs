// src/shared/content/portable_text.rs
//! Block-structured rich text as stored by the content store.
//!
//! Rich text fields (`bio`, `description`) arrive as an array of blocks. Each
//! block holds a list of spans plus the mark definitions its spans refer to.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::web::html::html_escape;

/// Ellipsis appended to every excerpt.
pub const EXCERPT_SUFFIX: &str = "...";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(rename = "_type", default = "default_block_type")]
    pub block_type: String,
    #[serde(rename = "_key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(default)]
    pub children: Vec<Span>,
    #[serde(default)]
    pub mark_defs: Vec<MarkDef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Span {
    #[serde(rename = "_type", default = "default_span_type")]
    pub span_type: String,
    #[serde(rename = "_key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub marks: Vec<String>,
}

/// Annotation referenced by key from a span's `marks` (e.g. a link).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MarkDef {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_type")]
    pub mark_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

fn default_block_type() -> String {
    "block".to_string()
}

fn default_span_type() -> String {
    "span".to_string()
}

impl Block {
    pub fn is_text_block(&self) -> bool {
        self.block_type == "block"
    }

    /// Concatenated text of every span in this block.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|span| span.text.as_deref())
            .collect()
    }
}

/// Flattens rich text into plain text: spans are concatenated and text blocks
/// are separated by a blank line. Non-text blocks are skipped.
pub fn to_plain_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .filter(|b| b.is_text_block())
        .map(Block::text)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Text of the first child of the first block, if there is one.
pub fn first_span_text(blocks: &[Block]) -> Option<String> {
    blocks
        .first()
        .and_then(|block| block.children.first())
        .and_then(|span| span.text.clone())
}

/// Plain-text summary: the first `max_chars` characters of the flattened text
/// followed by an ellipsis. The cut is by character count and may split a word.
///
/// Returns `None` only when there is no rich text at all.
pub fn excerpt(blocks: Option<&[Block]>, max_chars: usize) -> Option<String> {
    let blocks = blocks?;
    let mut summary: String = to_plain_text(blocks).chars().take(max_chars).collect();
    summary.push_str(EXCERPT_SUFFIX);
    Some(summary)
}

/// Renders rich text to HTML. All text and attribute values are escaped.
pub fn to_html(blocks: &[Block]) -> String {
    let mut out = String::new();
    let mut open_list: Option<&'static str> = None;

    for block in blocks.iter().filter(|b| b.is_text_block()) {
        let list_tag = match block.list_item.as_deref() {
            Some("number") => Some("ol"),
            Some(_) => Some("ul"),
            None => None,
        };

        if open_list != list_tag {
            if let Some(tag) = open_list {
                out.push_str(&format!("</{}>", tag));
            }
            if let Some(tag) = list_tag {
                out.push_str(&format!("<{}>", tag));
            }
            open_list = list_tag;
        }

        let inner = render_spans(block);
        if list_tag.is_some() {
            out.push_str(&format!("<li>{}</li>", inner));
            continue;
        }

        let tag = match block.style.as_deref() {
            Some("h2") => "h2",
            Some("h3") => "h3",
            Some("blockquote") => "blockquote",
            _ => "p",
        };
        out.push_str(&format!("<{tag}>{inner}</{tag}>"));
    }

    if let Some(tag) = open_list {
        out.push_str(&format!("</{}>", tag));
    }

    out
}

fn render_spans(block: &Block) -> String {
    block
        .children
        .iter()
        .map(|span| render_span(span, &block.mark_defs))
        .collect()
}

/// Schemes a link annotation may use to render as an anchor.
pub const LINK_SCHEMES: &[&str] = &["http", "https", "mailto"];

fn is_allowed_href(href: &str) -> bool {
    Url::parse(href).is_ok_and(|url| LINK_SCHEMES.contains(&url.scheme()))
}

fn render_span(span: &Span, mark_defs: &[MarkDef]) -> String {
    let mut html = html_escape(span.text.as_deref().unwrap_or_default());

    for mark in &span.marks {
        html = match mark.as_str() {
            "strong" => format!("<strong>{}</strong>", html),
            "em" => format!("<em>{}</em>", html),
            key => match mark_defs.iter().find(|d| d.key == key) {
                Some(MarkDef {
                    mark_type,
                    href: Some(href),
                    ..
                }) if mark_type == "link" && is_allowed_href(href) => format!(
                    r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                    html_escape(href),
                    html
                ),
                _ => html,
            },
        };
    }

    html
}
