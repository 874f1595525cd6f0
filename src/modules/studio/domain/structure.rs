use serde::Serialize;

use crate::modules::studio::domain::content_schema::{ABOUT, CV, PROJECT};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DeskStructure {
    pub title: &'static str,
    pub items: Vec<DeskItem>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeskItem {
    pub title: &'static str,
    pub schema_type: &'static str,
    #[serde(flatten)]
    pub kind: DeskItemKind,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DeskItemKind {
    DocumentList,
    /// Edits exactly one document with a fixed id.
    #[serde(rename_all = "camelCase")]
    Singleton { document_id: &'static str },
}

/// Studio navigation: the project list, then the two singletons.
pub fn desk_structure() -> DeskStructure {
    DeskStructure {
        title: "Content",
        items: vec![
            DeskItem {
                title: "Projects",
                schema_type: PROJECT,
                kind: DeskItemKind::DocumentList,
            },
            DeskItem {
                title: "About",
                schema_type: ABOUT,
                kind: DeskItemKind::Singleton { document_id: "about" },
            },
            DeskItem {
                title: "CV / Resume",
                schema_type: CV,
                kind: DeskItemKind::Singleton { document_id: "cv" },
            },
        ],
    }
}
