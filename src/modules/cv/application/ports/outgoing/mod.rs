pub mod cv_query;
pub use cv_query::{CvQuery, CvQueryError};
