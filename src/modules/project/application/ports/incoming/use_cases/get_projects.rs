use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::ProjectQueryError;
use crate::modules::project::domain::entities::ProjectCard;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for GetProjectsError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::StoreError(msg) => GetProjectsError::QueryFailed(msg),
            ProjectQueryError::SerializationError(msg) => GetProjectsError::QueryFailed(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    /// All projects as listing cards, newest first. Empty is a valid result.
    async fn execute(&self) -> Result<Vec<ProjectCard>, GetProjectsError>;
}
