use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SuggestProjectSlugError {
    #[error("Title produces an empty slug")]
    EmptyTitle,

    #[error("No free slug found for '{0}'")]
    Exhausted(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SuggestProjectSlugUseCase: Send + Sync {
    /// Slug derived from `title` that no existing project uses.
    async fn execute(&self, title: &str) -> Result<String, SuggestProjectSlugError>;
}
