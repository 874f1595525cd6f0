use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::content::assets::ImageRef;
use crate::shared::content::portable_text::{self, Block};

/// Slug field as stored: `{ "_type": "slug", "current": "..." }`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct Slug {
    #[serde(default)]
    pub current: Option<String>,
}

impl Slug {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: Some(current.into()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct BeforeAfter {
    #[serde(default)]
    pub before: Option<ImageRef>,
    #[serde(default)]
    pub after: Option<ImageRef>,
}

impl BeforeAfter {
    /// Both images, or nothing: a lone before/after image is not shown.
    pub fn pair(&self) -> Option<(&ImageRef, &ImageRef)> {
        match (&self.before, &self.after) {
            (Some(before), Some(after)) => Some((before, after)),
            _ => None,
        }
    }
}

/// Full project document as shown on the detail page.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<Slug>,
    #[serde(default)]
    pub main_image: Option<ImageRef>,
    #[serde(default)]
    pub gallery: Option<Vec<ImageRef>>,
    #[serde(default)]
    pub project_date: Option<NaiveDate>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub description: Option<Vec<Block>>,
    #[serde(default)]
    pub materials: Option<Vec<String>>,
    #[serde(default)]
    pub techniques: Option<Vec<String>>,
    #[serde(default)]
    pub before_after: Option<BeforeAfter>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub featured: bool,
}

/// Project row used by listings, still carrying its rich-text description.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<Slug>,
    #[serde(default)]
    pub main_image: Option<ImageRef>,
    #[serde(default)]
    pub project_date: Option<NaiveDate>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub description: Option<Vec<Block>>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub featured: bool,
}

/// Listing card: summary with the description reduced to an excerpt.
#[derive(Serialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub title: Option<String>,
    pub slug: Option<Slug>,
    pub main_image: Option<ImageRef>,
    pub project_date: Option<NaiveDate>,
    pub client: Option<String>,
    pub excerpt: Option<String>,
    pub featured: bool,
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl Project {
    pub fn slug_str(&self) -> Option<&str> {
        self.slug.as_ref().and_then(|s| non_blank(&s.current))
    }

    pub fn display_title(&self) -> &str {
        non_blank(&self.title).unwrap_or("Untitled project")
    }

    pub fn description_blocks(&self) -> &[Block] {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn excerpt(&self, max_chars: usize) -> Option<String> {
        portable_text::excerpt(self.description.as_deref(), max_chars)
    }

    pub fn gallery_images(&self) -> &[ImageRef] {
        self.gallery.as_deref().unwrap_or_default()
    }

    pub fn material_list(&self) -> &[String] {
        self.materials.as_deref().unwrap_or_default()
    }

    pub fn technique_list(&self) -> &[String] {
        self.techniques.as_deref().unwrap_or_default()
    }

    pub fn before_after_pair(&self) -> Option<(&ImageRef, &ImageRef)> {
        self.before_after.as_ref().and_then(BeforeAfter::pair)
    }
}

impl ProjectSummary {
    pub fn slug_str(&self) -> Option<&str> {
        self.slug.as_ref().and_then(|s| non_blank(&s.current))
    }

    pub fn into_card(self, excerpt_length: usize) -> ProjectCard {
        ProjectCard {
            excerpt: portable_text::excerpt(self.description.as_deref(), excerpt_length),
            id: self.id,
            title: self.title,
            slug: self.slug,
            main_image: self.main_image,
            project_date: self.project_date,
            client: self.client,
            featured: self.featured,
        }
    }
}

impl ProjectCard {
    pub fn slug_str(&self) -> Option<&str> {
        self.slug.as_ref().and_then(|s| non_blank(&s.current))
    }

    pub fn display_title(&self) -> &str {
        non_blank(&self.title).unwrap_or("Untitled project")
    }
}
