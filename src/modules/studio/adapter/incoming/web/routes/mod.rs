mod get_schema;
mod get_structure;
mod suggest_slug;
mod validate_document;

pub use get_schema::*;
pub use get_structure::*;
pub use suggest_slug::*;
pub use validate_document::*;
