//! HTML fragments for the project list and detail pages.

use chrono::Datelike;

use crate::modules::project::domain::entities::{Project, ProjectCard};
use crate::shared::content::assets::{ImageRef, ImageUrlBuilder};
use crate::shared::content::portable_text;
use crate::shared::web::html::{bullet_list, html_escape, image_tag, PageMeta};

const CARD_IMAGE: (u32, u32) = (600, 450);
const DETAIL_IMAGE: (u32, u32) = (1200, 750);
const SQUARE_IMAGE: (u32, u32) = (600, 600);

/// Listing card shared by the projects page and the home page grid.
pub fn project_card(card: &ProjectCard, images: &ImageUrlBuilder, show_year: bool) -> String {
    let title = card.display_title();
    let href = format!("/projects/{}", card.slug_str().unwrap_or_default());

    let mut html = format!(r#"<article class="project-card"><a href="{}">"#, html_escape(&href));

    if let Some(img) = card.main_image.as_ref() {
        html.push_str(&sized_image(images, img, CARD_IMAGE, title, "card-image"));
    }

    html.push_str(&format!("<h3>{}</h3>", html_escape(title)));

    if show_year {
        if let Some(date) = card.project_date {
            html.push_str(&format!(r#"<p class="year">{}</p>"#, date.year()));
        }
    }
    if let Some(client) = card.client.as_deref() {
        html.push_str(&format!(r#"<p class="client">Client: {}</p>"#, html_escape(client)));
    }
    if let Some(excerpt) = card.excerpt.as_deref() {
        html.push_str(&format!(r#"<p class="excerpt">{}</p>"#, html_escape(excerpt)));
    }
    if show_year && card.featured {
        html.push_str(r#"<span class="badge">Featured</span>"#);
    }

    html.push_str("</a></article>");
    html
}

pub fn projects_page(cards: &[ProjectCard], images: &ImageUrlBuilder) -> (PageMeta, String) {
    let listing = if cards.is_empty() {
        r#"<p class="empty">No projects yet. Add some projects in the studio.</p>"#.to_string()
    } else {
        let items: String = cards
            .iter()
            .map(|c| project_card(c, images, true))
            .collect();
        format!(r#"<div class="project-grid">{}</div>"#, items)
    };

    let body = format!(
        r#"<section class="projects"><h1>Projects</h1><p class="lead">A collection of conservation and restoration work</p>{}</section>"#,
        listing
    );

    (
        PageMeta::titled("Projects")
            .with_description("A collection of conservation and restoration work"),
        body,
    )
}

/// Head metadata for a project: `"{title} | {site title}"`, described by its
/// excerpt or a generic line when it has no description.
pub fn project_meta(project: &Project, site_title: Option<&str>, excerpt_length: usize) -> PageMeta {
    let title = project.display_title();
    let page_title = match site_title {
        Some(site) => format!("{} | {}", title, site),
        None => title.to_string(),
    };
    let description = project
        .excerpt(excerpt_length)
        .unwrap_or_else(|| format!("Conservation project: {}", title));

    PageMeta::titled(page_title).with_description(description)
}

pub fn project_detail(project: &Project, images: &ImageUrlBuilder) -> String {
    let title = project.display_title();
    let mut html = String::from(r#"<article class="project"><a href="/projects" class="back">Back to Projects</a>"#);

    // Header
    html.push_str(&format!("<header><h1>{}</h1>", html_escape(title)));
    let mut facts = Vec::new();
    if let Some(date) = project.project_date {
        facts.push(format!(r#"<span class="date">{}</span>"#, date.format("%B %-d, %Y")));
    }
    if let Some(client) = project.client.as_deref() {
        facts.push(format!(r#"<span class="client">Client: {}</span>"#, html_escape(client)));
    }
    if !facts.is_empty() {
        html.push_str(&format!(r#"<div class="facts">{}</div>"#, facts.join(" &bull; ")));
    }
    html.push_str("</header>");

    if let Some(img) = project.main_image.as_ref() {
        html.push_str(r#"<figure class="main-image">"#);
        html.push_str(&sized_image(images, img, DETAIL_IMAGE, title, "hero"));
        if let Some(caption) = img.caption.as_deref() {
            html.push_str(&format!("<figcaption>{}</figcaption>", html_escape(caption)));
        }
        html.push_str("</figure>");
    }

    if let Some((before, after)) = project.before_after_pair() {
        html.push_str(&format!(
            r#"<section class="before-after"><h2>Before &amp; After</h2><figure>{}<figcaption>Before</figcaption></figure><figure>{}<figcaption>After</figcaption></figure></section>"#,
            sized_image(images, before, SQUARE_IMAGE, "Before restoration", ""),
            sized_image(images, after, SQUARE_IMAGE, "After restoration", ""),
        ));
    }

    if !project.description_blocks().is_empty() {
        html.push_str(&format!(
            r#"<section class="description"><h2>Project Description</h2>{}</section>"#,
            portable_text::to_html(project.description_blocks())
        ));
    }

    if !project.material_list().is_empty() {
        html.push_str(&format!(
            r#"<section class="materials"><h2>Materials Used</h2>{}</section>"#,
            bullet_list(project.material_list())
        ));
    }
    if !project.technique_list().is_empty() {
        html.push_str(&format!(
            r#"<section class="techniques"><h2>Techniques</h2>{}</section>"#,
            bullet_list(project.technique_list())
        ));
    }

    let gallery = project.gallery_images();
    if !gallery.is_empty() {
        html.push_str(r#"<section class="gallery"><h2>Gallery</h2>"#);
        for (index, img) in gallery.iter().enumerate() {
            let fallback = format!("{} gallery image {}", title, index + 1);
            html.push_str("<figure>");
            html.push_str(&sized_image(images, img, SQUARE_IMAGE, &fallback, ""));
            if let Some(caption) = img.caption.as_deref() {
                html.push_str(&format!("<figcaption>{}</figcaption>", html_escape(caption)));
            }
            html.push_str("</figure>");
        }
        html.push_str("</section>");
    }

    html.push_str(r#"<nav class="project-nav"><a href="/projects">View All Projects</a></nav></article>"#);
    html
}

fn sized_image(
    images: &ImageUrlBuilder,
    img: &ImageRef,
    (width, height): (u32, u32),
    fallback_alt: &str,
    class: &str,
) -> String {
    match images.sized(img, width, height) {
        Some(src) => image_tag(&src, img.alt_or(fallback_alt), width, height, class),
        None => String::new(),
    }
}
