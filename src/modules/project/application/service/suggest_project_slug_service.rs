use async_trait::async_trait;
use tracing::debug;

use crate::modules::project::application::ports::incoming::use_cases::{
    SuggestProjectSlugError, SuggestProjectSlugUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::studio::domain::slug::{candidates, slugify, SLUG_MAX_LENGTH};

pub struct SuggestProjectSlugService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> SuggestProjectSlugService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> SuggestProjectSlugUseCase for SuggestProjectSlugService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, title: &str) -> Result<String, SuggestProjectSlugError> {
        let base = slugify(title, SLUG_MAX_LENGTH);
        if base.is_empty() {
            return Err(SuggestProjectSlugError::EmptyTitle);
        }

        for candidate in candidates(&base, SLUG_MAX_LENGTH) {
            let taken = self
                .query
                .slug_exists(&candidate)
                .await
                .map_err(|e| SuggestProjectSlugError::RepositoryError(e.to_string()))?;

            if !taken {
                return Ok(candidate);
            }
            debug!("Slug '{}' already used, trying next", candidate);
        }

        Err(SuggestProjectSlugError::Exhausted(base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::ports::outgoing::ProjectQueryError;
    use crate::modules::project::application::service::test_support::MockProjectQuery;

    fn taken(slugs: &[&str]) -> MockProjectQuery {
        MockProjectQuery {
            taken_slugs: slugs.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn execute_returns_free_slug() {
        let service = SuggestProjectSlugService::new(taken(&[]));

        assert_eq!(
            service.execute("Baroque Altarpiece").await.unwrap(),
            "baroque-altarpiece"
        );
    }

    #[tokio::test]
    async fn execute_appends_counter_when_taken() {
        let service =
            SuggestProjectSlugService::new(taken(&["baroque-altarpiece", "baroque-altarpiece-2"]));

        assert_eq!(
            service.execute("Baroque Altarpiece").await.unwrap(),
            "baroque-altarpiece-3"
        );
    }

    #[tokio::test]
    async fn execute_rejects_empty_title() {
        let service = SuggestProjectSlugService::new(taken(&[]));

        assert_eq!(
            service.execute("  ?? ").await,
            Err(SuggestProjectSlugError::EmptyTitle)
        );
    }

    #[tokio::test]
    async fn execute_maps_store_error() {
        let service = SuggestProjectSlugService::new(MockProjectQuery::failing(
            ProjectQueryError::StoreError("timeout".to_string()),
        ));

        assert!(matches!(
            service.execute("Screen").await,
            Err(SuggestProjectSlugError::RepositoryError(_))
        ));
    }
}
