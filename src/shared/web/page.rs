// src/shared/web/page.rs
use actix_web::{http::header::ContentType, http::StatusCode, HttpResponse};

use crate::shared::web::html::{layout, PageMeta};

/// Responders for server-rendered pages.
pub struct HtmlPage;

impl HtmlPage {
    pub fn ok(meta: &PageMeta, body: &str) -> HttpResponse {
        Self::render(StatusCode::OK, meta, body)
    }

    pub fn not_found(message: &str) -> HttpResponse {
        let body = format!(
            r#"<section class="error"><h1>Not Found</h1><p>{}</p><a href="/projects">Back to Projects</a></section>"#,
            crate::shared::web::html::html_escape(message)
        );
        Self::render(StatusCode::NOT_FOUND, &PageMeta::titled("Not Found"), &body)
    }

    /// Generic failure page; never includes partially rendered content.
    pub fn internal_error() -> HttpResponse {
        let body = r#"<section class="error"><h1>Something went wrong</h1><p>The page could not be rendered. Please try again later.</p></section>"#;
        Self::render(
            StatusCode::INTERNAL_SERVER_ERROR,
            &PageMeta::titled("Error"),
            body,
        )
    }

    fn render(status: StatusCode, meta: &PageMeta, body: &str) -> HttpResponse {
        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(layout(meta, body))
    }
}
