use async_trait::async_trait;

use crate::modules::about::domain::entities::SiteSettings;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSiteSettingsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSiteSettingsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Option<SiteSettings>, GetSiteSettingsError>;
}
