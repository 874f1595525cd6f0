use async_trait::async_trait;

use crate::modules::project::domain::entities::Project;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectBySlugError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetProjectBySlugUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<Project, GetProjectBySlugError>;
}
