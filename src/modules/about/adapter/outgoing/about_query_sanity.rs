use async_trait::async_trait;
use serde::Deserialize;

use crate::modules::about::application::ports::outgoing::{AboutQuery, AboutQueryError};
use crate::modules::about::domain::entities::{
    site_title, About, HomepageData, SiteSettings, SocialLinks,
};
use crate::shared::content::assets::ImageRef;
use crate::shared::content::portable_text::{first_span_text, Block};
use crate::shared::content_store::{queries, QueryParams, SanityClient};

/// Raw homepage projection; the tagline is derived from `bioLead`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HomepageRecord {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    bio_lead: Option<Vec<Block>>,
    #[serde(default)]
    profile_photo: Option<ImageRef>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    social_links: Option<SocialLinks>,
}

impl From<HomepageRecord> for HomepageData {
    fn from(r: HomepageRecord) -> Self {
        HomepageData {
            tagline: r.bio_lead.as_deref().and_then(first_span_text),
            name: r.name,
            profile_photo: r.profile_photo,
            email: r.email,
            social_links: r.social_links,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SiteSettingsRecord {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    bio_lead: Option<Vec<Block>>,
    #[serde(default)]
    social_links: Option<SocialLinks>,
}

impl From<SiteSettingsRecord> for SiteSettings {
    fn from(r: SiteSettingsRecord) -> Self {
        SiteSettings {
            site_title: site_title(r.name.as_deref()),
            site_description: r.bio_lead.as_deref().and_then(first_span_text),
            name: r.name,
            email: r.email,
            social_links: r.social_links,
        }
    }
}

#[derive(Clone)]
pub struct AboutQuerySanity {
    client: SanityClient,
}

impl AboutQuerySanity {
    pub fn new(client: SanityClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AboutQuery for AboutQuerySanity {
    async fn get_homepage_data(&self) -> Result<Option<HomepageData>, AboutQueryError> {
        let record: Option<HomepageRecord> = self
            .client
            .fetch(queries::HOMEPAGE_DATA, &QueryParams::none())
            .await?;

        Ok(record.map(HomepageData::from))
    }

    async fn get_about(&self) -> Result<Option<About>, AboutQueryError> {
        Ok(self
            .client
            .fetch(queries::ABOUT_PAGE, &QueryParams::none())
            .await?)
    }

    async fn get_site_settings(&self) -> Result<Option<SiteSettings>, AboutQueryError> {
        let record: Option<SiteSettingsRecord> = self
            .client
            .fetch(queries::SITE_SETTINGS, &QueryParams::none())
            .await?;

        Ok(record.map(SiteSettings::from))
    }
}
