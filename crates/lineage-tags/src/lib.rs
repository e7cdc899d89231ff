//! Entity tag access for lineage
//!
//! This crate provides:
//! - The entity tag data model as served by the tagging service
//! - Collaborator traits (`FeatureGate`, `EntityTagsSource`) the resolver is written against
//! - `CloudDriverClient`, an HTTP implementation of both traits
//!
//! # Example
//!
//! ```no_run
//! use lineage_tags::{CloudDriverClient, EntityTagsQuery, EntityTagsSource, FeatureGate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lineage_tags::Error> {
//!     let client = CloudDriverClient::new("http://clouddriver:7002")?;
//!
//!     if client.entity_tags_available().await? {
//!         let query = EntityTagsQuery::server_group("aws", "myapp-v003", "prod", "us-east-1");
//!         let records = client.get_entity_tags(&query).await?;
//!         println!("{} tag record(s)", records.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod clouddriver;
pub mod error;
pub mod traits;
pub mod types;

pub use clouddriver::CloudDriverClient;
pub use error::{Error, Result};
pub use traits::{EntityTagsSource, FeatureGate};
pub use types::{
    EntityRef, EntityTags, EntityTagsQuery, StageFeature, Tag, ENTITY_TAGS_FEATURE,
    SERVER_GROUP_ENTITY_TYPE,
};
