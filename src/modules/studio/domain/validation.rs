use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::modules::studio::domain::content_schema::document_type;
use crate::modules::studio::domain::schema::{FieldDef, FieldType};
use crate::modules::studio::domain::StudioError;

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ValidationIssue {
    /// Dotted field path, with `[i]` for array items: `credentials[0].year`.
    pub path: String,
    pub message: String,
}

/// Checks a draft document against its type's rule table. An empty result
/// means the document can be published.
pub fn validate_document(type_name: &str, doc: &Value) -> Result<Vec<ValidationIssue>, StudioError> {
    let doc_type =
        document_type(type_name).ok_or_else(|| StudioError::UnknownType(type_name.to_string()))?;
    let fields = doc.as_object().ok_or(StudioError::NotAnObject)?;

    let mut issues = Vec::new();
    validate_fields(&doc_type.fields, fields, "", &mut issues);
    Ok(issues)
}

fn validate_fields(
    defs: &[FieldDef],
    values: &Map<String, Value>,
    prefix: &str,
    issues: &mut Vec<ValidationIssue>,
) {
    for def in defs {
        let path = if prefix.is_empty() {
            def.name.to_string()
        } else {
            format!("{}.{}", prefix, def.name)
        };
        let value = values.get(def.name);

        for rule in &def.rules {
            if let Some(message) = rule.check(value) {
                issues.push(ValidationIssue {
                    path: path.clone(),
                    message,
                });
            }
        }

        if let Some(value) = value.filter(|v| !v.is_null()) {
            validate_nested(&def.field_type, value, &path, issues);
        }
    }
}

fn validate_nested(
    field_type: &FieldType,
    value: &Value,
    path: &str,
    issues: &mut Vec<ValidationIssue>,
) {
    if let FieldType::Array { of } = field_type {
        for (index, item) in value.as_array().into_iter().flatten().enumerate() {
            validate_nested(of, item, &format!("{}[{}]", path, index), issues);
        }
        return;
    }

    let nested = field_type.nested_fields();
    if nested.is_empty() {
        return;
    }
    if let Some(values) = value.as_object() {
        validate_fields(nested, values, path, issues);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paths(issues: &[ValidationIssue]) -> Vec<&str> {
        issues.iter().map(|i| i.path.as_str()).collect()
    }

    fn valid_project() -> Value {
        json!({
            "_type": "project",
            "title": "Baroque Altarpiece",
            "slug": { "_type": "slug", "current": "baroque-altarpiece" },
            "mainImage": {
                "_type": "image",
                "asset": { "_ref": "image-ab12-1600x1200-jpg" },
                "alt": "Altarpiece after treatment"
            },
            "description": [{ "_type": "block", "children": [{ "_type": "span", "text": "Cleaning." }] }],
            "featured": false
        })
    }

    #[test]
    fn valid_project_has_no_issues() {
        assert!(validate_document("project", &valid_project()).unwrap().is_empty());
    }

    #[test]
    fn empty_project_reports_required_fields() {
        let issues = validate_document("project", &json!({})).unwrap();

        assert_eq!(paths(&issues), vec!["title", "slug", "mainImage", "description"]);
        assert!(issues.iter().all(|i| i.message == "Required"));
    }

    #[test]
    fn nested_image_alt_is_checked() {
        let mut doc = valid_project();
        doc["gallery"] = json!([
            { "_type": "image", "asset": { "_ref": "image-cd34-800x800-jpg" }, "alt": "Detail" },
            { "_type": "image", "asset": { "_ref": "image-ef56-800x800-jpg" } }
        ]);
        doc["mainImage"]["alt"] = json!("");

        let issues = validate_document("project", &doc).unwrap();

        assert_eq!(paths(&issues), vec!["mainImage.alt", "gallery[1].alt"]);
    }

    #[test]
    fn bad_slug_is_reported() {
        let mut doc = valid_project();
        doc["slug"]["current"] = json!("Baroque Altarpiece");

        let issues = validate_document("project", &doc).unwrap();

        assert_eq!(paths(&issues), vec!["slug"]);
        assert!(issues[0].message.contains("lowercase"));
    }

    #[test]
    fn about_checks_email_links_and_credentials() {
        let doc = json!({
            "name": "Soogyoung Park",
            "bio": [{ "_type": "block" }],
            "email": "not-an-email",
            "socialLinks": { "linkedin": "linkedin.com/in/sp", "website": "https://sp.studio" },
            "credentials": [{ "title": "MA", "institution": "NYU" }]
        });

        let issues = validate_document("about", &doc).unwrap();

        assert_eq!(
            paths(&issues),
            vec!["credentials[0].year", "email", "socialLinks.linkedin"]
        );
    }

    #[test]
    fn about_empty_bio_fails_min_items() {
        let doc = json!({ "name": "SP", "bio": [], "email": "sp@example.org" });

        let issues = validate_document("about", &doc).unwrap();

        assert_eq!(paths(&issues), vec!["bio"]);
        assert_eq!(issues[0].message, "Must have at least 1 item(s)");
    }

    #[test]
    fn cv_rejects_wrong_extension() {
        let doc = json!({
            "cvFile": { "_type": "file", "asset": { "_ref": "file-abc-png" } },
            "lastUpdated": "2024-11-02"
        });

        let issues = validate_document("cv", &doc).unwrap();

        assert_eq!(paths(&issues), vec!["cvFile"]);
    }

    #[test]
    fn unknown_type_and_non_object() {
        assert_eq!(
            validate_document("post", &json!({})),
            Err(StudioError::UnknownType("post".to_string()))
        );
        assert_eq!(
            validate_document("cv", &json!([])),
            Err(StudioError::NotAnObject)
        );
    }
}
