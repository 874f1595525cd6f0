// src/modules/about/application/ports/outgoing/about_query.rs

use async_trait::async_trait;

use crate::modules::about::domain::entities::{About, HomepageData, SiteSettings};
use crate::shared::content_store::ContentStoreError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum AboutQueryError {
    #[error("Content store error: {0}")]
    StoreError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<ContentStoreError> for AboutQueryError {
    fn from(err: ContentStoreError) -> Self {
        match err {
            ContentStoreError::Decode(msg) => AboutQueryError::SerializationError(msg),
            other => AboutQueryError::StoreError(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Port (read-only, About singleton)
// ──────────────────────────────────────────────────────────
//

/// Every lookup reads the first About document; `Ok(None)` means it has not
/// been authored yet.
#[async_trait]
pub trait AboutQuery: Send + Sync {
    async fn get_homepage_data(&self) -> Result<Option<HomepageData>, AboutQueryError>;

    async fn get_about(&self) -> Result<Option<About>, AboutQueryError>;

    async fn get_site_settings(&self) -> Result<Option<SiteSettings>, AboutQueryError>;
}
