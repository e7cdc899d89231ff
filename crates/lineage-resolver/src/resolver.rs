//! Previous-image resolution

use crate::builder::{build, ImageDetails};
use crate::error::ResolveError;
use crate::extractor::extract;
use crate::fetcher::{FetchOutcome, TagFetcher};
use crate::key::ResolutionKey;
use lineage_core::retry::Sleeper;
use lineage_core::types::RetryPolicy;
use lineage_tags::{EntityTagsSource, FeatureGate};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// How a resolution ended, when it did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The tagging feature is disabled
    Unavailable,
    /// The tagging service kept failing; treated as "no tags"
    Degraded { attempts: u32, reason: String },
    /// The server group carries no tag record
    NoTags,
    /// A record exists but names no previous image
    NoLineage,
    /// The previous image was found
    Found(ImageDetails),
}

impl Resolution {
    pub fn image_details(&self) -> Option<&ImageDetails> {
        match self {
            Resolution::Found(details) => Some(details),
            _ => None,
        }
    }

    pub fn into_image_details(self) -> Option<ImageDetails> {
        match self {
            Resolution::Found(details) => Some(details),
            _ => None,
        }
    }
}

/// Resolves the image a server group ran before its latest deployment
///
/// Stateless between calls; concurrent resolutions share only the injected
/// collaborators.
pub struct PreviousImageResolver {
    fetcher: TagFetcher,
}

impl PreviousImageResolver {
    pub fn new(
        features: Arc<dyn FeatureGate>,
        tags: Arc<dyn EntityTagsSource>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            fetcher: TagFetcher::new(features, tags, policy),
        }
    }

    /// Replace the sleeper used between fetch attempts
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.fetcher = self.fetcher.with_sleeper(sleeper);
        self
    }

    /// Resolve `key` without logging the outcome
    pub async fn resolve(&self, key: &ResolutionKey) -> Result<Resolution, ResolveError> {
        let mut records = match self.fetcher.fetch(key).await {
            FetchOutcome::Unavailable => return Ok(Resolution::Unavailable),
            FetchOutcome::Degraded { attempts, reason } => {
                return Ok(Resolution::Degraded { attempts, reason })
            }
            FetchOutcome::Fetched { records, .. } => records,
        };

        if records.len() > 1 {
            return Err(ResolveError::duplicate_tag_records(
                key.clone(),
                records.len(),
            ));
        }

        let Some(record) = records.pop() else {
            return Ok(Resolution::NoTags);
        };

        Ok(match build(extract(&record)) {
            Some(details) => Resolution::Found(details),
            None => Resolution::NoLineage,
        })
    }

    /// Resolve the previous image of a server group
    ///
    /// Tagging service failures are logged and yield `Ok(None)`; only
    /// duplicate tag records are an error.
    pub async fn resolve_previous_image(
        &self,
        cloud_provider: &str,
        credentials: &str,
        region: &str,
        server_group_name: &str,
    ) -> Result<Option<ImageDetails>, ResolveError> {
        let key = ResolutionKey::new(cloud_provider, credentials, region, server_group_name);

        let resolution = self.resolve(&key).await?;
        match &resolution {
            Resolution::Degraded { attempts, reason } => {
                warn!(
                    key = %key,
                    attempts = *attempts,
                    "Unable to fetch entity tags, reason: {}",
                    reason
                );
            }
            Resolution::Found(details) => {
                info!(
                    key = %key,
                    image_name = details.image_name(),
                    "Resolved previous image"
                );
            }
            other => debug!(key = %key, outcome = ?other, "No previous image"),
        }

        Ok(resolution.into_image_details())
    }
}
