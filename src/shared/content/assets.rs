// src/shared/content/assets.rs
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const IMAGE_CDN_BASE: &str = "https://cdn.sanity.io/images";

lazy_static! {
    /// `image-<hash>-<width>x<height>-<format>`
    static ref IMAGE_ASSET_ID: Regex =
        Regex::new(r"^image-([A-Za-z0-9]+)-(\d+)x(\d+)-([a-z0-9]+)$").unwrap();
}

//
// ──────────────────────────────────────────────────────────
// Resolved asset shapes
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub aspect_ratio: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImageMetadata {
    #[serde(default)]
    pub lqip: Option<String>,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImageAsset {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub metadata: Option<ImageMetadata>,
}

/// An image field: the dereferenced asset plus editor supplied text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImageRef {
    #[serde(default)]
    pub asset: Option<ImageAsset>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

impl ImageRef {
    /// Alt text, or `fallback` when the editor left it empty.
    pub fn alt_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.alt
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(fallback)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileAsset {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub original_filename: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FileRef {
    #[serde(default)]
    pub asset: Option<FileAsset>,
}

/// Formats a byte count for download labels, e.g. `"245.3 KB"`.
pub fn human_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{:.1} {}", size, UNITS[unit])
}

//
// ──────────────────────────────────────────────────────────
// Image URL builder
// ──────────────────────────────────────────────────────────
//

/// Builds resized image URLs for assets of one project/dataset.
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    project_id: String,
    dataset: String,
}

impl ImageUrlBuilder {
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
        }
    }

    pub fn image<'a>(&'a self, asset: &'a ImageAsset) -> ImageUrl<'a> {
        ImageUrl {
            builder: self,
            asset,
            width: None,
            height: None,
        }
    }

    /// Shortcut for the common `image(asset).width(w).height(h).url()` chain on
    /// an optional image field.
    pub fn sized(&self, image: &ImageRef, width: u32, height: u32) -> Option<String> {
        let asset = image.asset.as_ref()?;
        self.image(asset).width(width).height(height).url()
    }
}

pub struct ImageUrl<'a> {
    builder: &'a ImageUrlBuilder,
    asset: &'a ImageAsset,
    width: Option<u32>,
    height: Option<u32>,
}

impl ImageUrl<'_> {
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Resolves to a CDN URL built from the asset id; falls back to the
    /// already-resolved asset URL. `None` when the asset has neither.
    pub fn url(&self) -> Option<String> {
        let base = self
            .asset
            .id
            .as_deref()
            .and_then(|id| self.cdn_path(id))
            .or_else(|| self.asset.url.clone())?;

        let params = self.query_params();
        if params.is_empty() {
            return Some(base);
        }

        let separator = if base.contains('?') { '&' } else { '?' };
        Some(format!("{}{}{}", base, separator, params.join("&")))
    }

    fn cdn_path(&self, asset_id: &str) -> Option<String> {
        let caps = IMAGE_ASSET_ID.captures(asset_id)?;
        Some(format!(
            "{}/{}/{}/{}-{}x{}.{}",
            IMAGE_CDN_BASE,
            self.builder.project_id,
            self.builder.dataset,
            &caps[1],
            &caps[2],
            &caps[3],
            &caps[4]
        ))
    }

    fn query_params(&self) -> Vec<String> {
        let mut params = Vec::new();
        if let Some(w) = self.width {
            params.push(format!("w={}", w));
        }
        if let Some(h) = self.height {
            params.push(format!("h={}", h));
        }
        params
    }
}
