use async_trait::async_trait;

use crate::modules::about::domain::entities::About;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetAboutPageError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetAboutPageUseCase: Send + Sync {
    /// `Ok(None)` when the About document has not been authored yet.
    async fn execute(&self) -> Result<Option<About>, GetAboutPageError>;
}
