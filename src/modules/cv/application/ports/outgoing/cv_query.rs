use async_trait::async_trait;

use crate::cv::domain::entities::CvFile;
use crate::shared::content_store::ContentStoreError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CvQueryError {
    #[error("Content store error: {0}")]
    StoreError(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ContentStoreError> for CvQueryError {
    fn from(err: ContentStoreError) -> Self {
        match err {
            ContentStoreError::Query(msg) | ContentStoreError::Decode(msg) => {
                CvQueryError::QueryFailed(msg)
            }
            other => CvQueryError::StoreError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait CvQuery: Send + Sync {
    /// First CV document, if one has been uploaded.
    async fn get_cv_file(&self) -> Result<Option<CvFile>, CvQueryError>;
}
