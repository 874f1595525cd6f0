// src/shared/web/html.rs
//! HTML helper functions shared by every page.

use chrono::{Datelike, Utc};

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate an anchor tag. External links open in a new tab.
pub fn link_to(href: &str, text: &str, class: &str) -> String {
    let external = href.starts_with("http://") || href.starts_with("https://");
    let target = if external {
        r#" target="_blank" rel="noopener noreferrer""#
    } else {
        ""
    };

    format!(
        r#"<a href="{}" class="{}"{}>{}</a>"#,
        html_escape(href),
        class,
        target,
        html_escape(text)
    )
}

/// Generate an image tag with explicit dimensions.
pub fn image_tag(src: &str, alt: &str, width: u32, height: u32, class: &str) -> String {
    format!(
        r#"<img src="{}" alt="{}" width="{}" height="{}" class="{}" loading="lazy">"#,
        html_escape(src),
        html_escape(alt),
        width,
        height,
        class
    )
}

/// `<ul>` of escaped items, or nothing for an empty list.
pub fn bullet_list(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let lis: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", html_escape(item)))
        .collect();
    format!(r#"<ul class="list">{}</ul>"#, lis)
}

/// Head metadata for a page.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: Option<String>,
}

impl PageMeta {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Wraps page content in the site shell (head, navigation, footer).
pub fn layout(meta: &PageMeta, body: &str) -> String {
    let description = meta
        .description
        .as_deref()
        .map(|d| format!(r#"<meta name="description" content="{}">"#, html_escape(d)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
{description}
</head>
<body>
<header class="site-header"><nav><a href="/">Home</a> <a href="/projects">Projects</a> <a href="/about">About</a></nav></header>
<main>
{body}
</main>
</body>
</html>"#,
        title = html_escape(&meta.title),
        description = description,
        body = body
    )
}

pub fn current_year() -> i32 {
    Utc::now().year()
}
