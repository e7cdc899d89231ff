//! # lineage-core
//!
//! Core library for lineage providing:
//! - Runtime configuration types and the hierarchical config loader
//! - Error types shared by the lineage crates
//! - Retry execution engine with policy-based configuration

pub mod config;
pub mod error;
pub mod retry;
pub mod types;

pub use config::ConfigLoader;
pub use error::{Error, Result};
pub use types::{ClouddriverConfig, RetryPolicy, RetryStrategy, RuntimeConfig};
