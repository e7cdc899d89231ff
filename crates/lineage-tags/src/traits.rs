//! Collaborator traits for tag lookups

use crate::error::Result;
use crate::types::{EntityTags, EntityTagsQuery};
use async_trait::async_trait;
use std::sync::Arc;

/// Reports whether the entity tagging feature is enabled
#[async_trait]
pub trait FeatureGate: Send + Sync {
    /// `Ok(false)` when the feature is disabled; `Err` when the answer could
    /// not be obtained
    async fn entity_tags_available(&self) -> Result<bool>;
}

/// Looks up entity tag records
#[async_trait]
pub trait EntityTagsSource: Send + Sync {
    /// Fetch all tag records matching `query`
    async fn get_entity_tags(&self, query: &EntityTagsQuery) -> Result<Vec<EntityTags>>;
}

#[async_trait]
impl<T: FeatureGate + ?Sized> FeatureGate for Arc<T> {
    async fn entity_tags_available(&self) -> Result<bool> {
        (**self).entity_tags_available().await
    }
}

#[async_trait]
impl<T: EntityTagsSource + ?Sized> EntityTagsSource for Arc<T> {
    async fn get_entity_tags(&self, query: &EntityTagsQuery) -> Result<Vec<EntityTags>> {
        (**self).get_entity_tags(query).await
    }
}
