use async_trait::async_trait;

use crate::cv::application::ports::outgoing::{CvQuery, CvQueryError};
use crate::cv::application::use_cases::get_cv_file::{GetCvFileError, GetCvFileUseCase};
use crate::cv::domain::entities::CvFile;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct GetCvFileService<Q>
where
    Q: CvQuery,
{
    query: Q,
}

impl<Q> GetCvFileService<Q>
where
    Q: CvQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCvFileUseCase for GetCvFileService<Q>
where
    Q: CvQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Option<CvFile>, GetCvFileError> {
        let cv = self.query.get_cv_file().await.map_err(|e| match e {
            CvQueryError::StoreError(msg) => GetCvFileError::RepositoryError(msg),
            CvQueryError::QueryFailed(msg) => GetCvFileError::RepositoryError(msg),
        })?;

        // An uploaded document without a resolvable file has nothing to offer.
        Ok(cv.filter(|cv| cv.download_url().is_some()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Unit tests (service only)
// ──────────────────────────────────────────────────────────
//
