use async_trait::async_trait;

use crate::modules::about::application::ports::incoming::use_cases::{
    GetHomepageDataError, GetHomepageDataUseCase,
};
use crate::modules::about::application::ports::outgoing::{AboutQuery, AboutQueryError};
use crate::modules::about::domain::entities::HomepageData;

pub struct GetHomepageDataService<Q>
where
    Q: AboutQuery,
{
    query: Q,
}

impl<Q> GetHomepageDataService<Q>
where
    Q: AboutQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetHomepageDataUseCase for GetHomepageDataService<Q>
where
    Q: AboutQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Option<HomepageData>, GetHomepageDataError> {
        let data = self.query.get_homepage_data().await.map_err(|e| match e {
            AboutQueryError::StoreError(msg) => GetHomepageDataError::RepositoryError(msg),
            AboutQueryError::SerializationError(msg) => {
                GetHomepageDataError::RepositoryError(msg)
            }
        })?;

        if data.is_none() {
            tracing::warn!("About document not found; home page renders without profile data");
        }

        Ok(data)
    }
}
