use chrono::NaiveDate;

use crate::about::domain::entities::{
    site_title, About, Credential, HomepageData, SiteSettings, SocialLinks,
};
use crate::cv::domain::entities::CvFile;
use crate::project::domain::entities::{Project, ProjectCard, ProjectSummary, Slug};
use crate::shared::content::assets::{FileAsset, FileRef, ImageAsset, ImageRef};
use crate::shared::content::portable_text::test_blocks::paragraph;

const OWNER: &str = "Soogyoung Park";

fn image(id: &str, alt: &str) -> ImageRef {
    ImageRef {
        asset: Some(ImageAsset {
            id: Some(id.to_string()),
            ..Default::default()
        }),
        alt: Some(alt.to_string()),
        caption: None,
    }
}

fn social_links() -> SocialLinks {
    SocialLinks {
        instagram: Some("https://instagram.com/sp.conservation".to_string()),
        website: Some("https://sp-conservation.example.org".to_string()),
        ..Default::default()
    }
}

pub fn sample_about() -> About {
    About {
        name: Some(OWNER.to_string()),
        profile_photo: Some(image("image-a1b2-800x800-jpg", "Portrait")),
        bio: Some(vec![paragraph(&[
            "Paintings conservator with fifteen years of studio practice.",
        ])]),
        credentials: Some(vec![Credential {
            title: Some("MA Conservation of Easel Paintings".to_string()),
            institution: Some("Courtauld Institute of Art".to_string()),
            year: Some("2010".to_string()),
            description: None,
        }]),
        specializations: Some(vec![
            "Oil Paintings".to_string(),
            "Panel Paintings".to_string(),
        ]),
        email: Some("studio@example.org".to_string()),
        phone: None,
        social_links: Some(social_links()),
    }
}

pub fn sample_homepage() -> HomepageData {
    HomepageData {
        name: Some(OWNER.to_string()),
        tagline: Some("Paintings conservator based in Seoul.".to_string()),
        profile_photo: Some(image("image-a1b2-800x800-jpg", "Portrait")),
        email: Some("studio@example.org".to_string()),
        social_links: Some(social_links()),
    }
}

pub fn sample_site_settings() -> SiteSettings {
    SiteSettings {
        name: Some(OWNER.to_string()),
        email: Some("studio@example.org".to_string()),
        social_links: Some(social_links()),
        site_title: site_title(Some(OWNER)),
        site_description: Some("Paintings conservator based in Seoul.".to_string()),
    }
}

/// CV without a version label, so pages show just the update date.
pub fn sample_cv() -> CvFile {
    CvFile {
        cv_file: Some(FileRef {
            asset: Some(FileAsset {
                id: Some("file-9f8e7d-pdf".to_string()),
                url: Some("https://cdn.sanity.io/files/testproj/production/9f8e7d.pdf".to_string()),
                original_filename: Some("Park_CV.pdf".to_string()),
                size: Some(2048),
            }),
        }),
        last_updated: NaiveDate::from_ymd_opt(2024, 11, 2),
        version: None,
    }
}

pub fn sample_project(slug: &str) -> Project {
    Project {
        id: Some(format!("project-{}", slug)),
        title: Some("Baroque Altarpiece".to_string()),
        slug: Some(Slug::new(slug)),
        main_image: Some(image("image-c3d4-2400x1500-jpg", "Altarpiece after treatment")),
        project_date: NaiveDate::from_ymd_opt(2024, 3, 12),
        client: Some("Diocesan Museum".to_string()),
        description: Some(vec![paragraph(&[
            "Structural consolidation of a gilded altarpiece.",
        ])]),
        materials: Some(vec!["Sturgeon glue".to_string()]),
        techniques: Some(vec!["Consolidation".to_string()]),
        ..Default::default()
    }
}

pub fn sample_card(slug: &str, featured: bool) -> ProjectCard {
    ProjectSummary {
        id: Some(format!("project-{}", slug)),
        title: Some(slug.replace('-', " ")),
        slug: Some(Slug::new(slug)),
        main_image: Some(image("image-e5f6-1600x1200-jpg", "Detail")),
        project_date: NaiveDate::from_ymd_opt(2023, 9, 1),
        client: None,
        description: Some(vec![paragraph(&["Cleaning and retouching of a canvas."])]),
        featured,
    }
    .into_card(150)
}
