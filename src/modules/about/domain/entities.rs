use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::content::assets::ImageRef;
use crate::shared::content::portable_text::Block;

/// Suffix appended to the owner's name to form the site title.
pub const SITE_TITLE_SUFFIX: &str = " - Art Conservation";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct Credential {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct SocialLinks {
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl SocialLinks {
    /// Present links as `(label, url)` in display order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("LinkedIn", &self.linkedin),
            ("Instagram", &self.instagram),
            ("Twitter", &self.twitter),
            ("Website", &self.website),
        ]
        .into_iter()
        .filter_map(|(label, url)| {
            url.as_deref()
                .filter(|u| !u.trim().is_empty())
                .map(|u| (label, u))
        })
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// The About singleton, every field as authored.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct About {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub profile_photo: Option<ImageRef>,
    #[serde(default)]
    pub bio: Option<Vec<Block>>,
    #[serde(default)]
    pub credentials: Option<Vec<Credential>>,
    #[serde(default)]
    pub specializations: Option<Vec<String>>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub social_links: Option<SocialLinks>,
}

/// Hero data for the home page.
#[derive(Serialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomepageData {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub profile_photo: Option<ImageRef>,
    pub email: Option<String>,
    pub social_links: Option<SocialLinks>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub name: Option<String>,
    pub email: Option<String>,
    pub social_links: Option<SocialLinks>,
    pub site_title: Option<String>,
    pub site_description: Option<String>,
}

pub fn site_title(name: Option<&str>) -> Option<String> {
    name.map(|n| format!("{}{}", n, SITE_TITLE_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn social_entries_skip_missing_and_blank() {
        let links = SocialLinks {
            linkedin: Some("https://linkedin.com/in/sp".to_string()),
            instagram: Some(" ".to_string()),
            twitter: None,
            website: Some("https://sp.studio".to_string()),
        };

        assert_eq!(
            links.entries(),
            vec![
                ("LinkedIn", "https://linkedin.com/in/sp"),
                ("Website", "https://sp.studio")
            ]
        );
        assert!(SocialLinks::default().is_empty());
    }

    #[test]
    fn site_title_concatenates_name() {
        assert_eq!(
            site_title(Some("Soogyoung Park")),
            Some("Soogyoung Park - Art Conservation".to_string())
        );
        assert_eq!(site_title(None), None);
    }
}
