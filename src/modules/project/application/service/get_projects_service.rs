use async_trait::async_trait;
use tracing::warn;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::modules::project::domain::entities::ProjectCard;
use crate::modules::project::domain::policies::ListingPolicy;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
    policy: ListingPolicy,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q, policy: ListingPolicy) -> Self {
        Self { query, policy }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ProjectCard>, GetProjectsError> {
        let mut projects = self
            .query
            .list_all()
            .await
            .map_err(GetProjectsError::from)?;

        self.policy.order_newest_first(&mut projects);

        Ok(projects
            .into_iter()
            .filter(|p| {
                let usable = p.slug_str().is_some();
                if !usable {
                    warn!("Skipping project {:?} without a slug", p.id);
                }
                usable
            })
            .map(|p| p.into_card(self.policy.list_excerpt_length))
            .collect())
    }
}
