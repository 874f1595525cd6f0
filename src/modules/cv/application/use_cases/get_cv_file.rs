use async_trait::async_trait;

use crate::cv::domain::entities::CvFile;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCvFileError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetCvFileUseCase: Send + Sync {
    async fn execute(&self) -> Result<Option<CvFile>, GetCvFileError>;
}
