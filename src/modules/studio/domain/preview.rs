//! List previews shown by the studio for each document.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::modules::studio::domain::content_schema::{ABOUT, CV, PROJECT};
use crate::modules::studio::domain::StudioError;

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Preview {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

pub fn preview(type_name: &str, doc: &Value) -> Result<Preview, StudioError> {
    match type_name {
        PROJECT => Ok(Preview {
            title: text(doc, "title").unwrap_or_default(),
            subtitle: Some(
                text(doc, "projectDate")
                    .and_then(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok())
                    .map(|d| d.year().to_string())
                    .unwrap_or_else(|| "No date".to_string()),
            ),
        }),
        CV => {
            let date = text(doc, "lastUpdated").unwrap_or_default();
            let subtitle = match text(doc, "version") {
                Some(version) => format!("Version {} - Updated {}", version, date),
                None => format!("Updated {}", date),
            };
            Ok(Preview {
                title: "CV / Resume".to_string(),
                subtitle: Some(subtitle),
            })
        }
        ABOUT => Ok(Preview {
            title: text(doc, "name").unwrap_or_default(),
            subtitle: None,
        }),
        other => Err(StudioError::UnknownType(other.to_string())),
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ItemPreview {
    pub path: String,
    #[serde(flatten)]
    pub preview: Preview,
}

/// Previews for array items that define their own, keyed by field path.
pub fn item_previews(type_name: &str, doc: &Value) -> Vec<ItemPreview> {
    if type_name != ABOUT {
        return Vec::new();
    }

    doc.get("credentials")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .enumerate()
        .map(|(index, credential)| ItemPreview {
            path: format!("credentials[{}]", index),
            preview: credential_preview(credential),
        })
        .collect()
}

fn credential_preview(credential: &Value) -> Preview {
    Preview {
        title: text(credential, "title").unwrap_or_default(),
        subtitle: Some(format!(
            "{} - {}",
            text(credential, "institution").unwrap_or_default(),
            text(credential, "year").unwrap_or_default()
        )),
    }
}

fn text(doc: &Value, field: &str) -> Option<String> {
    doc.get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
