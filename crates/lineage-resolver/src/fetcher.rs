//! Resilient retrieval of tag records

use crate::key::ResolutionKey;
use lineage_core::retry::{HttpStatusError, RetryError, RetryExecutor, Sleeper, TokioSleeper};
use lineage_core::types::RetryPolicy;
use lineage_tags::{EntityTags, EntityTagsQuery, EntityTagsSource, Error as TagsError, FeatureGate};
use std::sync::Arc;
use tracing::debug;

/// Result of a tag fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The tagging feature is disabled; nothing was queried
    Unavailable,
    /// Every permitted attempt failed; the last failure is kept as `reason`
    Degraded { attempts: u32, reason: String },
    /// The query succeeded on attempt `attempts`
    Fetched {
        records: Vec<EntityTags>,
        attempts: u32,
    },
}

/// Fetches tag records for a server group under a retry policy
pub struct TagFetcher {
    features: Arc<dyn FeatureGate>,
    tags: Arc<dyn EntityTagsSource>,
    policy: RetryPolicy,
    sleeper: Arc<dyn Sleeper>,
}

impl TagFetcher {
    pub fn new(
        features: Arc<dyn FeatureGate>,
        tags: Arc<dyn EntityTagsSource>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            features,
            tags,
            policy,
            sleeper: Arc::new(TokioSleeper),
        }
    }

    /// Replace the sleeper used between attempts
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Fetch the tag records of `key`
    ///
    /// Every attempt asks the feature gate first. A disabled feature ends the
    /// fetch at once without a tag query; a failed gate call or tag query is
    /// retried under the policy. Never fails: exhausting the budget is
    /// reported as `Degraded`.
    pub async fn fetch(&self, key: &ResolutionKey) -> FetchOutcome {
        let query = key.to_query();
        let fast_fail = self.policy.fast_fail;
        let executor = RetryExecutor::new("entity-tags", self.policy.clone())
            .with_sleeper(self.sleeper.clone());

        let mut attempts = 0;
        let result = executor
            .execute(
                || {
                    attempts += 1;
                    self.fetch_once(&query)
                },
                |err| !fast_fail || is_retryable(err),
            )
            .await;

        match result {
            Ok(Some(records)) => FetchOutcome::Fetched { records, attempts },
            Ok(None) => {
                debug!(key = %key, "entity tags are not available");
                FetchOutcome::Unavailable
            }
            Err(err) => FetchOutcome::Degraded {
                attempts: err.attempts(),
                reason: degraded_reason(err),
            },
        }
    }

    /// One gate check plus tag query; `None` when the feature is disabled
    async fn fetch_once(
        &self,
        query: &EntityTagsQuery,
    ) -> lineage_tags::Result<Option<Vec<EntityTags>>> {
        if !self.features.entity_tags_available().await? {
            return Ok(None);
        }
        self.tags.get_entity_tags(query).await.map(Some)
    }
}

/// Malformed responses and client errors will not fix themselves
fn is_retryable(err: &TagsError) -> bool {
    match err {
        TagsError::Decode { .. } | TagsError::InvalidUrl { .. } | TagsError::Client(_) => false,
        _ => err.is_transient(),
    }
}

fn degraded_reason(err: RetryError<TagsError>) -> String {
    err.into_source().to_string()
}
