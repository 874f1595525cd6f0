use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::content::assets::{human_file_size, FileRef};

/// Download metadata of the CV singleton.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CvFile {
    #[serde(default)]
    pub cv_file: Option<FileRef>,
    #[serde(default)]
    pub last_updated: Option<NaiveDate>,
    #[serde(default)]
    pub version: Option<String>,
}

impl CvFile {
    /// URL of the uploaded file; `None` when the upload is missing.
    pub fn download_url(&self) -> Option<&str> {
        self.cv_file
            .as_ref()
            .and_then(|f| f.asset.as_ref())
            .and_then(|a| a.url.as_deref())
    }

    pub fn filename(&self) -> Option<&str> {
        self.cv_file
            .as_ref()
            .and_then(|f| f.asset.as_ref())
            .and_then(|a| a.original_filename.as_deref())
    }

    pub fn size_label(&self) -> Option<String> {
        self.cv_file
            .as_ref()
            .and_then(|f| f.asset.as_ref())
            .and_then(|a| a.size)
            .map(human_file_size)
    }

    /// "Version v2.0 - Updated 2024-11-02", or just the update date.
    pub fn status_line(&self) -> Option<String> {
        let date = self.last_updated?.format("%Y-%m-%d").to_string();
        Some(match self.version.as_deref().filter(|v| !v.trim().is_empty()) {
            Some(version) => format!("Version {} - Updated {}", version, date),
            None => format!("Updated {}", date),
        })
    }
}
