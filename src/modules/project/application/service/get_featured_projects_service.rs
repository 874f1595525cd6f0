use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetFeaturedProjectsError, GetFeaturedProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::modules::project::domain::entities::ProjectCard;
use crate::modules::project::domain::policies::ListingPolicy;

#[derive(Clone)]
pub struct GetFeaturedProjectsService {
    query: Arc<dyn ProjectQuery>,
    policy: ListingPolicy,
}

impl GetFeaturedProjectsService {
    pub fn new(query: Arc<dyn ProjectQuery>, policy: ListingPolicy) -> Self {
        Self { query, policy }
    }
}

#[async_trait]
impl GetFeaturedProjectsUseCase for GetFeaturedProjectsService {
    async fn execute(&self) -> Result<Vec<ProjectCard>, GetFeaturedProjectsError> {
        let fetched = self
            .query
            .list_featured(self.policy.featured_limit)
            .await
            .map_err(|e| GetFeaturedProjectsError::RepositoryError(e.to_string()))?;

        let linkable = fetched
            .into_iter()
            .filter(|p| p.slug_str().is_some())
            .collect();

        Ok(self
            .policy
            .select_featured(linkable)
            .into_iter()
            .map(|p| p.into_card(self.policy.featured_excerpt_length))
            .collect())
    }
}
