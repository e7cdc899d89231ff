//! Previous-image resolution for rollbacks
//!
//! Given a server group, finds the image it ran before its most recent
//! deployment by reading the `spinnaker:metadata` entity tag:
//!
//! 1. [`TagFetcher`] loads zero or one tag record, retrying a flaky tagging
//!    service and downgrading persistent failures to "no data".
//! 2. The record count is validated; more than one record is a
//!    [`ResolveError::DuplicateTagRecords`].
//! 3. [`extract`] decodes the `previousServerGroup` payload.
//! 4. [`build`] turns it into [`ImageDetails`] when an image name is known.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use lineage_core::types::RetryPolicy;
//! use lineage_resolver::PreviousImageResolver;
//! use lineage_tags::CloudDriverClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(CloudDriverClient::new("http://clouddriver:7002")?);
//!     let resolver = PreviousImageResolver::new(client.clone(), client, RetryPolicy::default());
//!
//!     if let Some(image) = resolver
//!         .resolve_previous_image("aws", "prod", "us-east-1", "myapp-v003")
//!         .await?
//!     {
//!         println!("roll back to {}", image.image_name());
//!     }
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod key;
pub mod resolver;

pub use builder::{build, ImageDetails};
pub use error::ResolveError;
pub use extractor::{extract, BuildInfo, JenkinsInfo, PreviousServerGroup, LINEAGE_TAG};
pub use fetcher::{FetchOutcome, TagFetcher};
pub use key::ResolutionKey;
pub use resolver::{PreviousImageResolver, Resolution};
