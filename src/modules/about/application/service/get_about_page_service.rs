use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::about::application::ports::incoming::use_cases::{
    GetAboutPageError, GetAboutPageUseCase,
};
use crate::modules::about::application::ports::outgoing::AboutQuery;
use crate::modules::about::domain::entities::About;

#[derive(Clone)]
pub struct GetAboutPageService {
    query: Arc<dyn AboutQuery>,
}

impl GetAboutPageService {
    pub fn new(query: Arc<dyn AboutQuery>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl GetAboutPageUseCase for GetAboutPageService {
    async fn execute(&self) -> Result<Option<About>, GetAboutPageError> {
        self.query
            .get_about()
            .await
            .map_err(|e| GetAboutPageError::RepositoryError(e.to_string()))
    }
}
