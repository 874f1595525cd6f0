mod project_query_sanity;

pub use project_query_sanity::ProjectQuerySanity;
