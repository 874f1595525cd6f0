// src/shared/content_store/client.rs
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::shared::content_store::ContentStoreConfig;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContentStoreError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Content store responded with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Query error: {0}")]
    Query(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

//
// ──────────────────────────────────────────────────────────
// Query parameters
// ──────────────────────────────────────────────────────────
//

/// Named query variables, sent as `$name=<json>`.
#[derive(Debug, Clone, Default)]
pub struct QueryParams(Vec<(String, Value)>);

impl QueryParams {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.0.push((name.trim_start_matches('$').to_string(), value.into()));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, Value)> {
        self.0.iter()
    }
}

//
// ──────────────────────────────────────────────────────────
// HTTP seam
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Internal seam so the client can be exercised without a network.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &Url, bearer: Option<&str>) -> Result<TransportResponse, String>;
}

pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url, bearer: Option<&str>) -> Result<TransportResponse, String> {
        let mut request = self.http.get(url.clone());
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| e.to_string())?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| e.to_string())?;

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Client
// ──────────────────────────────────────────────────────────
//

#[derive(Deserialize)]
struct QueryEnvelope {
    #[serde(default)]
    result: Value,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: StoreErrorBody,
}

#[derive(Deserialize)]
struct StoreErrorBody {
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

/// Read-only client for the hosted content store's query API.
#[derive(Clone)]
pub struct SanityClient {
    config: ContentStoreConfig,
    transport: Arc<dyn HttpTransport>,
}

impl SanityClient {
    pub fn new(config: ContentStoreConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(config: ContentStoreConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ContentStoreConfig {
        &self.config
    }

    /// Runs `query` and decodes its result. A `null` result (no matching
    /// document) is `Ok(None)`.
    pub async fn fetch<T>(
        &self,
        query: &str,
        params: &QueryParams,
    ) -> Result<Option<T>, ContentStoreError>
    where
        T: DeserializeOwned,
    {
        let value = self.fetch_value(query, params).await?;
        if value.is_null() {
            return Ok(None);
        }

        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| ContentStoreError::Decode(e.to_string()))
    }

    /// Raw result value of `query`.
    pub async fn fetch_value(
        &self,
        query: &str,
        params: &QueryParams,
    ) -> Result<Value, ContentStoreError> {
        let url = self.query_url(query, params)?;
        let started = Instant::now();

        let response = self
            .transport
            .get(&url, self.config.read_token.as_deref())
            .await
            .map_err(|e| {
                tracing::error!("Content store request failed: {}", e);
                ContentStoreError::Transport(e)
            })?;

        tracing::debug!(
            status = response.status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Content store query completed"
        );

        if !(200..300).contains(&response.status) {
            let err = map_error_response(&response);
            tracing::error!("Content store query rejected: {}", err);
            return Err(err);
        }

        let envelope: QueryEnvelope = serde_json::from_slice(&response.body)
            .map_err(|e| ContentStoreError::Decode(e.to_string()))?;

        Ok(envelope.result)
    }

    fn query_url(&self, query: &str, params: &QueryParams) -> Result<Url, ContentStoreError> {
        let mut url = Url::parse(&self.config.query_endpoint())
            .map_err(|e| ContentStoreError::Transport(format!("invalid endpoint: {}", e)))?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", query.trim());
            for (name, value) in params.iter() {
                pairs.append_pair(&format!("${}", name), &value.to_string());
            }
        }

        Ok(url)
    }
}

fn map_error_response(response: &TransportResponse) -> ContentStoreError {
    match serde_json::from_slice::<ErrorEnvelope>(&response.body) {
        Ok(ErrorEnvelope { error }) if response.status == 400 => ContentStoreError::Query(
            error
                .description
                .or(error.kind)
                .unwrap_or_else(|| "query rejected".to_string()),
        ),
        Ok(ErrorEnvelope { error }) => ContentStoreError::Status {
            status: response.status,
            message: error.description.unwrap_or_default(),
        },
        Err(_) => ContentStoreError::Status {
            status: response.status,
            message: String::from_utf8_lossy(&response.body).into_owned(),
        },
    }
}
