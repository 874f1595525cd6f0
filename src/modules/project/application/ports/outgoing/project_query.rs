// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;

use crate::modules::project::domain::entities::{Project, ProjectSummary};
use crate::shared::content_store::ContentStoreError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Content store error: {0}")]
    StoreError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<ContentStoreError> for ProjectQueryError {
    fn from(err: ContentStoreError) -> Self {
        match err {
            ContentStoreError::Decode(msg) => ProjectQueryError::SerializationError(msg),
            other => ProjectQueryError::StoreError(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Port (read-only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Every project, newest project date first.
    async fn list_all(&self) -> Result<Vec<ProjectSummary>, ProjectQueryError>;

    /// Featured projects, newest first, at most `limit`.
    async fn list_featured(&self, limit: usize) -> Result<Vec<ProjectSummary>, ProjectQueryError>;

    /// Exact slug match; `Ok(None)` when no project has this slug.
    async fn get_by_slug(&self, slug: &str) -> Result<Option<Project>, ProjectQueryError>;

    /// Backs slug suggestion for new projects.
    async fn slug_exists(&self, slug: &str) -> Result<bool, ProjectQueryError>;
}
