pub mod about_query_sanity;

pub use about_query_sanity::AboutQuerySanity;
