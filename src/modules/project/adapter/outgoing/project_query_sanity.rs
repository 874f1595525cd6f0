use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectQueryError};
use crate::modules::project::domain::entities::{Project, ProjectSummary};
use crate::shared::content_store::{queries, QueryParams, SanityClient};

#[derive(Clone)]
pub struct ProjectQuerySanity {
    client: SanityClient,
}

impl ProjectQuerySanity {
    pub fn new(client: SanityClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProjectQuery for ProjectQuerySanity {
    async fn list_all(&self) -> Result<Vec<ProjectSummary>, ProjectQueryError> {
        let projects: Option<Vec<ProjectSummary>> = self
            .client
            .fetch(queries::ALL_PROJECTS, &QueryParams::none())
            .await?;

        Ok(projects.unwrap_or_default())
    }

    async fn list_featured(&self, limit: usize) -> Result<Vec<ProjectSummary>, ProjectQueryError> {
        let projects: Option<Vec<ProjectSummary>> = self
            .client
            .fetch(
                queries::FEATURED_PROJECTS,
                &QueryParams::none().with("limit", limit),
            )
            .await?;

        Ok(projects.unwrap_or_default())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Project>, ProjectQueryError> {
        Ok(self
            .client
            .fetch(
                queries::PROJECT_BY_SLUG,
                &QueryParams::none().with("slug", slug),
            )
            .await?)
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, ProjectQueryError> {
        let exists: Option<bool> = self
            .client
            .fetch(
                queries::PROJECT_SLUG_EXISTS,
                &QueryParams::none().with("slug", slug),
            )
            .await?;

        Ok(exists.unwrap_or(false))
    }
}
