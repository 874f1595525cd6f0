use async_trait::async_trait;

use crate::modules::about::domain::entities::HomepageData;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetHomepageDataError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetHomepageDataUseCase: Send + Sync {
    async fn execute(&self) -> Result<Option<HomepageData>, GetHomepageDataError>;
}
