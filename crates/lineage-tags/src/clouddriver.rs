//! HTTP client for a Clouddriver-compatible tagging service

use crate::error::{Error, Result};
use crate::traits::{EntityTagsSource, FeatureGate};
use crate::types::{EntityTags, EntityTagsQuery, StageFeature, ENTITY_TAGS_FEATURE};
use async_trait::async_trait;
use lineage_core::types::ClouddriverConfig;
use reqwest::header::{HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

/// Client for the tagging service REST API
#[derive(Debug, Clone)]
pub struct CloudDriverClient {
    client: reqwest::Client,
    base_url: String,
}

impl CloudDriverClient {
    /// Create a client with default timeout and user agent
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::from_config(&ClouddriverConfig {
            base_url: base_url.into(),
            ..ClouddriverConfig::default()
        })
    }

    /// Create a client from runtime configuration
    pub fn from_config(config: &ClouddriverConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|source| Error::InvalidUrl {
            url: base_url.clone(),
            source,
        })?;

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(Error::Client)?;

        Ok(Self { client, base_url })
    }

    /// Base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List the stage features known to the service
    pub async fn stage_features(&self) -> Result<Vec<StageFeature>> {
        let url = format!("{}/features/stages", self.base_url);
        self.get_json(&url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(|source| Error::Transport {
                url: url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::status(
                url,
                status.as_u16(),
                if body.is_empty() {
                    "(no response body)".to_string()
                } else {
                    body
                },
            ));
        }

        response.json().await.map_err(|source| Error::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl FeatureGate for CloudDriverClient {
    async fn entity_tags_available(&self) -> Result<bool> {
        let available = self
            .stage_features()
            .await?
            .iter()
            .any(|f| f.name == ENTITY_TAGS_FEATURE && f.enabled);
        trace!(available, "entity tags feature check");
        Ok(available)
    }
}

#[async_trait]
impl EntityTagsSource for CloudDriverClient {
    async fn get_entity_tags(&self, query: &EntityTagsQuery) -> Result<Vec<EntityTags>> {
        let base = format!("{}/tags", self.base_url);
        let url = Url::parse_with_params(&base, query.as_params())
            .map_err(|source| Error::InvalidUrl { url: base, source })?;

        let records: Vec<EntityTags> = self.get_json(url.as_str()).await?;
        trace!("Found {} tag record(s) for {}", records.len(), query.entity_id);
        Ok(records)
    }
}
