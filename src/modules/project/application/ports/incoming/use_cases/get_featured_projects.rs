use async_trait::async_trait;

use crate::modules::project::domain::entities::ProjectCard;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetFeaturedProjectsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetFeaturedProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProjectCard>, GetFeaturedProjectsError>;
}
