use async_trait::async_trait;

use crate::modules::about::application::ports::incoming::use_cases::{
    GetSiteSettingsError, GetSiteSettingsUseCase,
};
use crate::modules::about::application::ports::outgoing::AboutQuery;
use crate::modules::about::domain::entities::SiteSettings;

/// Site-wide settings are derived from the About document.
pub struct GetSiteSettingsService<Q>
where
    Q: AboutQuery,
{
    query: Q,
}

impl<Q> GetSiteSettingsService<Q>
where
    Q: AboutQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSiteSettingsUseCase for GetSiteSettingsService<Q>
where
    Q: AboutQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Option<SiteSettings>, GetSiteSettingsError> {
        self.query
            .get_site_settings()
            .await
            .map_err(|e| GetSiteSettingsError::RepositoryError(e.to_string()))
    }
}
