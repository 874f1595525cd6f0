pub mod content_schema;
pub mod preview;
pub mod rules;
pub mod schema;
pub mod slug;
pub mod structure;
pub mod validation;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StudioError {
    #[error("Unknown document type: {0}")]
    UnknownType(String),

    #[error("Document must be a JSON object")]
    NotAnObject,
}
