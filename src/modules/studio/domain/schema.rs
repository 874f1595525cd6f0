//! Document type definitions as served to the editing studio.

use serde::Serialize;

use crate::modules::studio::domain::rules::Rule;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentType {
    pub name: &'static str,
    pub title: &'static str,
    pub fields: Vec<FieldDef>,
    pub preview: PreviewSelect,
}

/// Field paths the studio reads to build a document's list preview.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct PreviewSelect {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<&'static str>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    pub name: &'static str,
    pub title: &'static str,
    #[serde(flatten)]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Rule>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldType {
    String,
    #[serde(rename_all = "camelCase")]
    Text { rows: u8 },
    Url,
    #[serde(rename_all = "camelCase")]
    Date { date_format: &'static str },
    #[serde(rename_all = "camelCase")]
    Boolean { initial_value: bool },
    #[serde(rename_all = "camelCase")]
    Slug { source: &'static str, max_length: usize },
    Image { hotspot: bool, fields: Vec<FieldDef> },
    File { accept: Vec<&'static str> },
    #[serde(rename_all = "camelCase")]
    Object {
        fields: Vec<FieldDef>,
        #[serde(skip_serializing_if = "Option::is_none")]
        preview: Option<PreviewSelect>,
    },
    Array { of: Box<FieldType> },
    Block {
        styles: Vec<&'static str>,
        lists: Vec<&'static str>,
        decorators: Vec<&'static str>,
        annotations: Vec<&'static str>,
    },
}

impl FieldDef {
    pub fn new(name: &'static str, title: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            title,
            field_type,
            description: None,
            rules: Vec::new(),
        }
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }
}

impl FieldType {
    /// Sub-fields for object and image item types inside arrays.
    pub fn nested_fields(&self) -> &[FieldDef] {
        match self {
            FieldType::Object { fields, .. } | FieldType::Image { fields, .. } => fields,
            _ => &[],
        }
    }
}
