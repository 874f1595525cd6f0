//! About page markup.

use crate::cv::domain::entities::CvFile;
use crate::modules::about::domain::entities::{About, Credential, SocialLinks};
use crate::shared::content::assets::ImageUrlBuilder;
use crate::shared::content::portable_text;
use crate::shared::web::html::{html_escape, image_tag, link_to, PageMeta};

const PROFILE_PHOTO: (u32, u32) = (300, 300);

pub fn about_meta(about: Option<&About>) -> PageMeta {
    match about.and_then(|a| a.name.as_deref()) {
        Some(name) => PageMeta::titled(format!("About | {}", name))
            .with_description(format!("Biography, credentials and contact details of {}", name)),
        None => PageMeta::titled("About"),
    }
}

pub fn about_page(about: Option<&About>, cv: Option<&CvFile>, images: &ImageUrlBuilder) -> String {
    let Some(about) = about else {
        // Nothing authored yet; the CV can still be offered.
        return format!(
            r#"<section class="about"><h1>About</h1>{}</section>"#,
            cv.map(cv_download).unwrap_or_default()
        );
    };

    let name = about.name.as_deref().unwrap_or_default();
    let mut html = String::from(r#"<section class="about"><div class="profile">"#);

    if let Some(photo) = about.profile_photo.as_ref() {
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

    html.push_str(&format!("<h1>{}</h1>", html_escape(name)));

    let specializations = about.specializations.as_deref().unwrap_or_default();
    if !specializations.is_empty() {
        let tags: String = specializations
            .iter()
            .map(|s| format!(r#"<span class="tag">{}</span>"#, html_escape(s)))
            .collect();
        html.push_str(&format!(
            r#"<div class="specializations"><h2>Specializations</h2>{}</div>"#,
            tags
        ));
    }

    html.push_str(r#"<div class="contact">"#);
    if let Some(email) = about.email.as_deref() {
        html.push_str(&format!(
            "<h3>Email</h3>{}",
            link_to(&format!("mailto:{}", email), email, "email")
        ));
    }
    if let Some(phone) = about.phone.as_deref().filter(|p| !p.trim().is_empty()) {
        html.push_str(&format!(
            "<h3>Phone</h3>{}",
            link_to(&format!("tel:{}", phone), phone, "phone")
        ));
    }
    if let Some(cv) = cv {
        html.push_str(&cv_download(cv));
    }
    html.push_str("</div></div>");

    if let Some(bio) = about.bio.as_deref().filter(|b| !b.is_empty()) {
        html.push_str(&format!(
            r#"<section class="biography"><h2>Biography</h2>{}</section>"#,
            portable_text::to_html(bio)
        ));
    }

    let credentials = about.credentials.as_deref().unwrap_or_default();
    if !credentials.is_empty() {
        let items: String = credentials.iter().map(credential).collect();
        html.push_str(&format!(
            r#"<section class="credentials"><h2>Education &amp; Credentials</h2>{}</section>"#,
            items
        ));
    }

    if let Some(links) = about.social_links.as_ref().filter(|l| !l.is_empty()) {
        html.push_str(&format!(
            r#"<section class="connect"><h2>Connect</h2>{}</section>"#,
            social_links(links)
        ));
    }

    html.push_str("</section>");
    html
}

/// Links in display order; empty string when none are set.
pub fn social_links(links: &SocialLinks) -> String {
    links
        .entries()
        .into_iter()
        .map(|(label, url)| link_to(url, label, "social"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn credential(c: &Credential) -> String {
    let mut html = format!(
        r#"<div class="credential"><h3>{}</h3><p>{} &bull; {}</p>"#,
        html_escape(c.title.as_deref().unwrap_or_default()),
        html_escape(c.institution.as_deref().unwrap_or_default()),
        html_escape(c.year.as_deref().unwrap_or_default()),
    );
    if let Some(description) = c.description.as_deref() {
        html.push_str(&format!("<p>{}</p>", html_escape(description)));
    }
    html.push_str("</div>");
    html
}

fn cv_download(cv: &CvFile) -> String {
    let Some(url) = cv.download_url() else {
        return String::new();
    };

    let mut details = Vec::new();
    if let Some(status) = cv.status_line() {
        details.push(status);
    }
    if let Some(size) = cv.size_label() {
        details.push(size);
    }

    let meta = if details.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="cv-meta">{}</p>"#, html_escape(&details.join(" - ")))
    };

    format!(
        r#"<div class="cv"><a href="{}" download class="button">Download CV</a>{}</div>"#,
        html_escape(url),
        meta
    )
}
