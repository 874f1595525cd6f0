mod cv_query_sanity;
pub use cv_query_sanity::CvQuerySanity;
