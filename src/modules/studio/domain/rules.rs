//! Validation rule table. Each rule is a predicate over a field value plus
//! the message reported when it does not hold.

use email_address::EmailAddress;
use reqwest::Url;
use serde::Serialize;
use serde_json::Value;

use crate::modules::studio::domain::slug::is_url_safe;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum Rule {
    Required,
    Email,
    Uri { schemes: Vec<&'static str> },
    MinItems { min: usize },
    MaxLength { max: usize },
    Slug,
    FileExtension { extensions: Vec<&'static str> },
}

impl Rule {
    pub fn http_uri() -> Self {
        Rule::Uri {
            schemes: vec!["http", "https"],
        }
    }

    /// `None` when `value` satisfies the rule. Rules other than `Required`
    /// accept an absent value.
    pub fn check(&self, value: Option<&Value>) -> Option<String> {
        let value = value.filter(|v| !v.is_null());

        match self {
            Rule::Required => (!is_present(value)).then(|| self.message()),
            _ => {
                let value = value?;
                (!self.holds(value)).then(|| self.message())
            }
        }
    }

    fn holds(&self, value: &Value) -> bool {
        match self {
            Rule::Required => true,
            Rule::Email => value.as_str().is_some_and(EmailAddress::is_valid),
            Rule::Uri { schemes } => value
                .as_str()
                .and_then(|s| Url::parse(s).ok())
                .is_some_and(|url| schemes.iter().any(|s| *s == url.scheme())),
            Rule::MinItems { min } => value.as_array().is_some_and(|items| items.len() >= *min),
            Rule::MaxLength { max } => text_of(value).is_some_and(|s| s.chars().count() <= *max),
            Rule::Slug => slug_current(value).is_some_and(is_url_safe),
            Rule::FileExtension { extensions } => match file_extension(value) {
                Some(ext) => extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext)),
                // Nothing to judge until an upload is attached.
                None => true,
            },
        }
    }

    pub fn message(&self) -> String {
        match self {
            Rule::Required => "Required".to_string(),
            Rule::Email => "Must be a valid email address".to_string(),
            Rule::Uri { schemes } => format!("Must be a URL using {}", schemes.join(" or ")),
            Rule::MinItems { min } => format!("Must have at least {} item(s)", min),
            Rule::MaxLength { max } => format!("Must be at most {} characters", max),
            Rule::Slug => "Must contain only lowercase letters, numbers and hyphens".to_string(),
            Rule::FileExtension { extensions } => {
                let list: Vec<String> = extensions.iter().map(|e| format!(".{}", e)).collect();
                format!("File must be one of: {}", list.join(", "))
            }
        }
    }
}

/// Present and meaningful: non-blank strings, slugs with a value, images and
/// files with an asset reference.
fn is_present(value: Option<&Value>) -> bool {
    match value {
        None => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Object(map)) => match map.get("_type").and_then(Value::as_str) {
            Some("slug") => map
                .get("current")
                .and_then(Value::as_str)
                .is_some_and(|s| !s.trim().is_empty()),
            Some("image") | Some("file") => map.get("asset").is_some_and(|a| !a.is_null()),
            _ => true,
        },
        Some(_) => true,
    }
}

fn text_of(value: &Value) -> Option<&str> {
    value.as_str().or_else(|| slug_current(value))
}

fn slug_current(value: &Value) -> Option<&str> {
    value
        .get("current")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// Extension from the uploaded file name, or from a `file-<hash>-<ext>`
/// asset reference.
fn file_extension(value: &Value) -> Option<String> {
    let asset = value.get("asset")?;

    if let Some(name) = asset.get("originalFilename").and_then(Value::as_str) {
        return name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase());
    }

    asset
        .get("_ref")
        .and_then(Value::as_str)
        .and_then(|r| r.strip_prefix("file-"))
        .and_then(|r| r.rsplit_once('-'))
        .map(|(_, ext)| ext.to_lowercase())
}
