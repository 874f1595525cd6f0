use async_trait::async_trait;

use crate::cv::application::ports::outgoing::{CvQuery, CvQueryError};
use crate::cv::domain::entities::CvFile;
use crate::shared::content_store::{queries, QueryParams, SanityClient};

#[derive(Clone)]
pub struct CvQuerySanity {
    client: SanityClient,
}

impl CvQuerySanity {
    pub fn new(client: SanityClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CvQuery for CvQuerySanity {
    async fn get_cv_file(&self) -> Result<Option<CvFile>, CvQueryError> {
        Ok(self
            .client
            .fetch(queries::CV_FILE, &QueryParams::none())
            .await?)
    }
}
