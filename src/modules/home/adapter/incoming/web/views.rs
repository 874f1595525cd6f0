use crate::modules::about::adapter::incoming::web::views::social_links;
use crate::modules::about::domain::entities::HomepageData;
use crate::modules::project::adapter::incoming::web::views::project_card;
use crate::modules::project::domain::entities::ProjectCard;
use crate::shared::content::assets::ImageUrlBuilder;
use crate::shared::web::html::{current_year, html_escape, image_tag, link_to, PageMeta};

const PROFILE_PHOTO: (u32, u32) = (200, 200);
const DEFAULT_NAME: &str = "Art Conservator";
const DEFAULT_TAGLINE: &str = "Preserving art for future generations";

pub fn home_meta(summary: Option<&HomepageData>) -> PageMeta {
    let name = summary
        .and_then(|s| s.name.as_deref())
        .unwrap_or(DEFAULT_NAME);
    let tagline = summary
        .and_then(|s| s.tagline.as_deref())
        .unwrap_or(DEFAULT_TAGLINE);

    PageMeta::titled(name).with_description(tagline)
}

pub fn home_page(
    summary: Option<&HomepageData>,
    featured: &[ProjectCard],
    images: &ImageUrlBuilder,
) -> String {
    let name = summary
        .and_then(|s| s.name.as_deref())
        .unwrap_or(DEFAULT_NAME);
    let tagline = summary
        .and_then(|s| s.tagline.as_deref())
        .unwrap_or(DEFAULT_TAGLINE);

    let mut html = String::from(r#"<section class="hero">"#);

    if let Some(photo) = summary.and_then(|s| s.profile_photo.as_ref()) {
        if let Some(src) = images.sized(photo, PROFILE_PHOTO.0, PROFILE_PHOTO.1) {
            html.push_str(&image_tag(
                &src,
                photo.alt_or(name),
                PROFILE_PHOTO.0,
                PROFILE_PHOTO.1,
                "profile-photo",
            ));
        }
    }

    html.push_str(&format!(
        r#"<h1>{}</h1><p class="tagline">{}</p><div class="actions"><a href="/projects" class="button">View Projects</a> <a href="/about" class="button">About Me</a></div></section>"#,
        html_escape(name),
        html_escape(tagline)
    ));

    if !featured.is_empty() {
        let cards: String = featured
            .iter()
            .map(|c| project_card(c, images, false))
            .collect();
        html.push_str(&format!(
            r#"<section class="featured"><h2>Featured Projects</h2><div class="project-grid">{}</div></section>"#,
            cards
        ));
    }

    html.push_str(&footer(summary));
    html
}

fn footer(summary: Option<&HomepageData>) -> String {
    let owner = summary
        .and_then(|s| s.name.as_deref())
        .unwrap_or("Art Conservator Portfolio");

    let mut links: Vec<String> = Vec::new();
    if let Some(social) = summary.and_then(|s| s.social_links.as_ref()) {
        let rendered = social_links(social);
        if !rendered.is_empty() {
            links.push(rendered);
        }
    }
    if let Some(email) = summary.and_then(|s| s.email.as_deref()) {
        links.push(link_to(&format!("mailto:{}", email), "Contact", "contact"));
    }

    format!(
        r#"<footer class="site-footer"><p>&copy; {} {}</p><div class="links">{}</div></footer>"#,
        current_year(),
        html_escape(owner),
        links.join(" ")
    )
}
