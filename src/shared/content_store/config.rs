// src/shared/content_store/config.rs
use crate::config::{optional, parse_or, required, ConfigError};

pub const DEFAULT_API_VERSION: &str = "2024-01-01";

/// Where the hosted content store lives. No credentials are compiled in; a read
/// token is only used when supplied through the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentStoreConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
    /// Overrides the derived API host (e.g. a local mock store).
    pub api_host: Option<String>,
    pub read_token: Option<String>,
}

impl ContentStoreConfig {
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            use_cdn: true,
            api_host: None,
            read_token: None,
        }
    }

    pub(crate) fn from_source<F>(get: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            project_id: required(get, "SANITY_PROJECT_ID")?,
            dataset: required(get, "SANITY_DATASET")?,
            api_version: optional(get, "SANITY_API_VERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            use_cdn: parse_or(get, "SANITY_USE_CDN", true)?,
            api_host: optional(get, "SANITY_API_HOST"),
            read_token: optional(get, "SANITY_READ_TOKEN"),
        })
    }

    /// Base URL of the HTTP query API, without the version segment.
    pub fn api_base(&self) -> String {
        if let Some(host) = &self.api_host {
            return host.trim_end_matches('/').to_string();
        }

        // The CDN does not serve authenticated requests.
        let subdomain = if self.use_cdn && self.read_token.is_none() {
            "apicdn"
        } else {
            "api"
        };
        format!("https://{}.{}.sanity.io", self.project_id, subdomain)
    }

    /// `{base}/v{version}/data/query/{dataset}`
    pub fn query_endpoint(&self) -> String {
        format!(
            "{}/v{}/data/query/{}",
            self.api_base(),
            self.api_version.trim_start_matches('v'),
            self.dataset
        )
    }
}
